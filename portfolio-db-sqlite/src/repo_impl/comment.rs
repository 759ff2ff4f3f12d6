use super::*;

// Stays below the default limit of bound parameters per statement
const MAX_IDS_PER_DELETE: usize = 500;

impl<'a> CommentRepo for StoreWriter<'a> {
    fn create_comment(&self, comment: Comment) -> Result<()> {
        create_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn recent_comments(&self, limit: usize) -> Result<Vec<Comment>> {
        recent_comments(&mut self.conn.borrow_mut(), limit)
    }
    fn all_comment_ids(&self) -> Result<Vec<Id>> {
        all_comment_ids(&mut self.conn.borrow_mut())
    }
    fn count_comments(&self) -> Result<usize> {
        count_comments(&mut self.conn.borrow_mut())
    }
    fn delete_comments(&self, ids: &[&str]) -> Result<usize> {
        delete_comments(&mut self.conn.borrow_mut(), ids)
    }
}

impl<'a> CommentRepo for StoreTransaction<'a> {
    fn create_comment(&self, comment: Comment) -> Result<()> {
        create_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn recent_comments(&self, limit: usize) -> Result<Vec<Comment>> {
        recent_comments(&mut self.conn.borrow_mut(), limit)
    }
    fn all_comment_ids(&self) -> Result<Vec<Id>> {
        all_comment_ids(&mut self.conn.borrow_mut())
    }
    fn count_comments(&self) -> Result<usize> {
        count_comments(&mut self.conn.borrow_mut())
    }
    fn delete_comments(&self, ids: &[&str]) -> Result<usize> {
        delete_comments(&mut self.conn.borrow_mut(), ids)
    }
}

impl<'a> CommentRepo for StoreReader<'a> {
    fn create_comment(&self, _comment: Comment) -> Result<()> {
        unreachable!("comments are never created through a reader");
    }
    fn recent_comments(&self, limit: usize) -> Result<Vec<Comment>> {
        recent_comments(&mut self.conn.borrow_mut(), limit)
    }
    fn all_comment_ids(&self) -> Result<Vec<Id>> {
        all_comment_ids(&mut self.conn.borrow_mut())
    }
    fn count_comments(&self) -> Result<usize> {
        count_comments(&mut self.conn.borrow_mut())
    }
    fn delete_comments(&self, _ids: &[&str]) -> Result<usize> {
        unreachable!("comments are never deleted through a reader");
    }
}

fn create_comment(conn: &mut SqliteConnection, comment: Comment) -> Result<()> {
    let new_comment = models::NewComment::from(&comment);
    let _count = diesel::insert_into(schema::comments::table)
        .values(&new_comment)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn recent_comments(conn: &mut SqliteConnection, limit: usize) -> Result<Vec<Comment>> {
    use schema::comments::dsl;
    let limit = i64::try_from(limit).unwrap_or(i64::MAX);
    Ok(schema::comments::table
        // The rowid reflects the insertion order if timestamps are equal
        .order_by((dsl::created_at.desc(), dsl::rowid.desc()))
        .limit(limit)
        .load::<models::Comment>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn all_comment_ids(conn: &mut SqliteConnection) -> Result<Vec<Id>> {
    use schema::comments::dsl;
    Ok(schema::comments::table
        .select(dsl::id)
        .load::<String>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Id::from)
        .collect())
}

fn count_comments(conn: &mut SqliteConnection) -> Result<usize> {
    let count = schema::comments::table
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(count as usize)
}

fn delete_comments(conn: &mut SqliteConnection, ids: &[&str]) -> Result<usize> {
    use schema::comments::dsl;
    log::debug!("Deleting {} comment(s)", ids.len());
    // All chunks or none
    let total_count = conn
        .transaction::<_, DieselError, _>(|conn| {
            let mut total_count = 0;
            for chunk in ids.chunks(MAX_IDS_PER_DELETE) {
                total_count +=
                    diesel::delete(schema::comments::table.filter(dsl::id.eq_any(chunk)))
                        .execute(conn)?;
            }
            Ok(total_count)
        })
        .map_err(from_diesel_err)?;
    debug_assert!(total_count <= ids.len());
    Ok(total_count)
}
