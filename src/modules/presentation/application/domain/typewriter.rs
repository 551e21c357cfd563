use serde::Serialize;
use std::time::Duration;
use utoipa::ToSchema;

pub const TYPE_DELAY: Duration = Duration::from_millis(100);
pub const HOLD_DELAY: Duration = Duration::from_millis(2000);
pub const DELETE_DELAY: Duration = Duration::from_millis(50);

pub const FALLBACK_ROLE: &str = "Data Scientist";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Deleting,
}

/// One rendered state of the hero headline and how long it stays up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct TypewriterFrame {
    #[schema(example = "Data Sci")]
    pub text: String,
    #[serde(rename = "delay_ms", serialize_with = "as_millis")]
    #[schema(value_type = u64, example = 100)]
    pub delay: Duration,
}

fn as_millis<S: serde::Serializer>(delay: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(delay.as_millis() as u64)
}

/// Types each role one character at a time, holds it, deletes it and
/// moves on to the next role, wrapping around forever.
#[derive(Debug, Clone)]
pub struct Typewriter {
    roles: Vec<Vec<char>>,
    index: usize,
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    /// An empty role list falls back to a single default role.
    pub fn new(roles: Vec<String>) -> Self {
        let mut roles: Vec<Vec<char>> = roles.iter().map(|r| r.chars().collect()).collect();
        if roles.is_empty() {
            roles.push(FALLBACK_ROLE.chars().collect());
        }

        Self {
            roles,
            index: 0,
            shown: 0,
            phase: Phase::Typing,
        }
    }

    pub fn role_index(&self) -> usize {
        self.index
    }

    pub fn advance(&mut self) -> TypewriterFrame {
        let len = self.roles[self.index].len();

        match self.phase {
            Phase::Typing => {
                if self.shown < len {
                    self.shown += 1;
                }
                let text = self.visible();
                if self.shown >= len {
                    self.phase = Phase::Deleting;
                    TypewriterFrame {
                        text,
                        delay: HOLD_DELAY,
                    }
                } else {
                    TypewriterFrame {
                        text,
                        delay: TYPE_DELAY,
                    }
                }
            }
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                let text = self.visible();
                if self.shown == 0 {
                    self.index = (self.index + 1) % self.roles.len();
                    self.phase = Phase::Typing;
                    TypewriterFrame {
                        text,
                        delay: TYPE_DELAY,
                    }
                } else {
                    TypewriterFrame {
                        text,
                        delay: DELETE_DELAY,
                    }
                }
            }
        }
    }

    fn visible(&self) -> String {
        self.roles[self.index][..self.shown].iter().collect()
    }
}
