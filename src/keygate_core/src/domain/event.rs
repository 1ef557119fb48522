use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::user::{User, UserId};

/// An immutable fact describing an identity state transition.
///
/// Exactly one event is produced per successful mutating operation; reads
/// and logins produce none. Delivery is fire-and-forget - see
/// [`EventPublisher`](crate::ports::event_publisher::EventPublisher).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "eventType")]
pub enum IdentityEvent {
    UserCreated {
        #[serde(rename = "userId")]
        user_id: UserId,
        email: String,
        timestamp: DateTime<Utc>,
    },
    UserUpdated {
        #[serde(rename = "userId")]
        user_id: UserId,
        email: String,
        #[serde(rename = "updatedFields")]
        updated_fields: Vec<String>,
        timestamp: DateTime<Utc>,
    },
}

impl IdentityEvent {
    pub fn user_created(user: &User) -> Self {
        Self::UserCreated {
            user_id: user.id(),
            email: user.email().as_str().to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn user_updated(user: &User, updated_fields: Vec<String>) -> Self {
        Self::UserUpdated {
            user_id: user.id(),
            email: user.email().as_str().to_string(),
            updated_fields,
            timestamp: Utc::now(),
        }
    }

    pub fn user_id(&self) -> UserId {
        match self {
            Self::UserCreated { user_id, .. } | Self::UserUpdated { user_id, .. } => *user_id,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            Self::UserCreated { email, .. } | Self::UserUpdated { email, .. } => email,
        }
    }
}
