use std::fmt::{Debug, Display};
use std::io::Error as IoError;

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use derivative::Derivative;
use mongodb::error::Error as DatabaseError;
use serde::Serialize;

use crate::campaign::CampaignId;

#[derive(Debug, Derivative)]
#[derivative(PartialEq, Eq)]
pub enum Error {
    // 400
    InvalidJson(#[derivative(PartialEq = "ignore")] JsonPayloadError),
    InvalidPath(#[derivative(PartialEq = "ignore")] PathError),
    MissingField {
        field: &'static str,
    },
    InvalidInvestment,
    MissingUploadField {
        field: &'static str,
    },
    InvalidFileContent,
    UnsupportedFileType {
        content_type: String,
    },

    // 404
    RouteNotFound,
    CampaignNotFound {
        campaign_id: CampaignId,
    },

    // 413
    FileTooLarge {
        size: usize,
    },

    // 500
    FailedDatabaseCall(#[derivative(PartialEq = "ignore")] DatabaseError),
    FailedObjectStoreCall(#[derivative(PartialEq = "ignore")] String),
    IoError(#[derivative(PartialEq = "ignore")] IoError),
}

impl Error {
    pub fn error_message(&self) -> String {
        match self {
            Error::InvalidJson(_) => "The given json could not be parsed".to_string(),
            Error::InvalidPath(_) => "The given path could not be parsed".to_string(),
            Error::MissingField { field } => format!("Required field: {}", field),
            Error::InvalidInvestment => "Investment must be greater than 0".to_string(),
            Error::MissingUploadField { field } => {
                format!("Missing required field: {}", field)
            }
            Error::InvalidFileContent => "File content is not valid base64".to_string(),
            Error::UnsupportedFileType { .. } => {
                "Invalid file type. Allowed types: JPG, PNG, GIF, PDF, SVG".to_string()
            }
            Error::RouteNotFound => "Route not found".to_string(),
            Error::CampaignNotFound { .. } => "Campaign not found".to_string(),
            Error::FileTooLarge { .. } => {
                "File too large. Maximum size is 10MB".to_string()
            }
            Error::FailedDatabaseCall(_) => {
                "An error occurred when communicating with the database".to_string()
            }
            Error::FailedObjectStoreCall(_) => {
                "An error occurred when communicating with object storage".to_string()
            }
            Error::IoError(_) => "An error occurred during an I/O operation".to_string(),
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidJson(_) => StatusCode::BAD_REQUEST,
            Error::InvalidPath(_) => StatusCode::BAD_REQUEST,
            Error::MissingField { .. } => StatusCode::BAD_REQUEST,
            Error::InvalidInvestment => StatusCode::BAD_REQUEST,
            Error::MissingUploadField { .. } => StatusCode::BAD_REQUEST,
            Error::InvalidFileContent => StatusCode::BAD_REQUEST,
            Error::UnsupportedFileType { .. } => StatusCode::BAD_REQUEST,
            Error::RouteNotFound => StatusCode::NOT_FOUND,
            Error::CampaignNotFound { .. } => StatusCode::NOT_FOUND,
            Error::FileTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Error::FailedDatabaseCall(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::FailedObjectStoreCall(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::IoError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        #[derive(Serialize)]
        struct ErrorBody {
            error: String,
        }

        HttpResponse::build(self.status_code()).json(&ErrorBody {
            error: self.error_message(),
        })
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        Debug::fmt(self, f)
    }
}

impl From<DatabaseError> for Error {
    fn from(error: DatabaseError) -> Error {
        Error::FailedDatabaseCall(error)
    }
}

impl From<IoError> for Error {
    fn from(error: IoError) -> Error {
        Error::IoError(error)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidJson(err) => Some(err),
            Error::InvalidPath(err) => Some(err),
            Error::FailedDatabaseCall(err) => Some(err),
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}
