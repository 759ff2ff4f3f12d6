use portfolio_core::usecases::Error as UsecaseError;
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Usecase(#[from] UsecaseError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, _req: &rocket::Request) -> response::Result<'o> {
        // Failures are never reported in detail to the client,
        // the default catcher renders a generic response.
        match self {
            Error::Usecase(err) => {
                error!("Use case failed: {err}");
            }
            Error::Other(err) => {
                error!("Request failed: {err:#}");
            }
        }
        Err(Status::InternalServerError)
    }
}
