use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Roles stored in `user_roles.role`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRole {
    Admin,
    Moderator,
    User,
}

impl AppRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppRole::Admin => "admin",
            AppRole::Moderator => "moderator",
            AppRole::User => "user",
        }
    }
}

impl fmt::Display for AppRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(AppRole::Admin),
            "moderator" => Ok(AppRole::Moderator),
            "user" => Ok(AppRole::User),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

/// Admin panel gate.
///
/// `Loading` means the role lookup has not produced an answer; nothing
/// is rendered and no action is offered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminGate {
    Loading,
    Unauthenticated,
    AccessDenied,
    Admin,
}

pub const SIGN_IN_ROUTE: &str = "/auth";

pub const ADMIN_TABS: &[&str] = &[
    "profile",
    "projects",
    "experiences",
    "skills",
    "social-links",
    "resources",
];

pub const ACCESS_DENIED_ACTIONS: &[&str] = &["sign_out", "return_home"];

/// Serializable rendering of an [`AdminGate`].
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AdminSessionView {
    Loading,
    Unauthenticated {
        #[schema(example = "/auth")]
        redirect: String,
    },
    AccessDenied {
        actions: Vec<String>,
    },
    Admin {
        tabs: Vec<String>,
    },
}

impl From<&AdminGate> for AdminSessionView {
    fn from(gate: &AdminGate) -> Self {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();

        match gate {
            AdminGate::Loading => AdminSessionView::Loading,
            AdminGate::Unauthenticated => AdminSessionView::Unauthenticated {
                redirect: SIGN_IN_ROUTE.to_string(),
            },
            AdminGate::AccessDenied => AdminSessionView::AccessDenied {
                actions: owned(ACCESS_DENIED_ACTIONS),
            },
            AdminGate::Admin => AdminSessionView::Admin {
                tabs: owned(ADMIN_TABS),
            },
        }
    }
}
