use warp::http::status::StatusCode;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, PartialEq, Eq)]
pub struct Error {
    pub code: StatusCode,
    pub msg: String,
}

impl Error {
    pub fn not_found(msg: String) -> Error {
        Error {
            code: StatusCode::NOT_FOUND,
            msg,
        }
    }

    pub fn bad_request(msg: String) -> Error {
        Error {
            code: StatusCode::BAD_REQUEST,
            msg,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let canon = self.code.canonical_reason().unwrap_or("");
        write!(f, "Error {} {}, {}", self.code.as_str(), canon, self.msg)
    }
}

impl std::error::Error for Error {}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Error {
        let msg = format!("Database rusqlite error {}", err);
        Error {
            code: StatusCode::INTERNAL_SERVER_ERROR,
            msg,
        }
    }
}

impl From<warp::Error> for Error {
    fn from(err: warp::Error) -> Error {
        let msg = format!("Failed to read request body, {}", err);
        Error {
            code: StatusCode::BAD_REQUEST,
            msg,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        let msg = format!("I/O error {}", err);
        Error {
            code: StatusCode::INTERNAL_SERVER_ERROR,
            msg,
        }
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Error {
        let msg = format!("Form field is not valid UTF-8, {}", err);
        Error {
            code: StatusCode::BAD_REQUEST,
            msg,
        }
    }
}

pub trait ErrorContext<T> {
    fn context<F>(self, context_add: F) -> Result<T>
    where
        F: FnOnce() -> String;
    fn context_str(self, context_add: &str) -> Result<T>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn context<F>(self, context_add: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        match self {
            Ok(t) => Ok(t),
            Err(err) => {
                let err: Error = err.into();
                let code = err.code;
                let mut msg = err.msg;
                msg.push_str(", ");
                msg.push_str(&context_add());
                Err(Error { code, msg })
            }
        }
    }
    fn context_str(self, context_add: &str) -> Result<T> {
        self.context(|| context_add.to_string())
    }
}
