///////////////////////////////////////////////////////////////////////
// Comments
///////////////////////////////////////////////////////////////////////

table! {
    comments (rowid) {
        rowid -> BigInt,
        id -> Text,
        created_at -> BigInt,
        comment -> Nullable<Text>,
        name -> Nullable<Text>,
    }
}
