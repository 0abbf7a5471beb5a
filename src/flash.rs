use axum::http::{header, HeaderMap};

const COOKIE_NAME: &str = "flash";

/// Confirmation shown once on the list page after a successful change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Added,
    Updated,
    Deleted,
}

impl Notice {
    pub fn code(self) -> &'static str {
        match self {
            Notice::Added => "added",
            Notice::Updated => "updated",
            Notice::Deleted => "deleted",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "added" => Some(Notice::Added),
            "updated" => Some(Notice::Updated),
            "deleted" => Some(Notice::Deleted),
            _ => None,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Notice::Added => "Your entry was successfully added!",
            Notice::Updated => "Your entry was successfully updated!",
            Notice::Deleted => "Your entry was successfully deleted!",
        }
    }

    pub fn set_cookie(self) -> String {
        format!("{COOKIE_NAME}={}; Path=/; HttpOnly; SameSite=Lax", self.code())
    }
}

pub fn clear_cookie() -> String {
    format!("{COOKIE_NAME}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax")
}

/// Reads the pending notice from the request cookies, if any.
pub fn pending(headers: &HeaderMap) -> Option<Notice> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == COOKIE_NAME)
        .and_then(|(_, code)| Notice::from_code(code))
}
