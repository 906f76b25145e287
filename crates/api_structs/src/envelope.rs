use serde::Deserialize;

/// Some backend deployments wrap every response payload in a `data`
/// envelope, others return the payload bare. Both are accepted here;
/// any other shape is a decode error surfaced to the caller.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Enveloped<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Enveloped<T> {
    pub fn into_inner(self) -> T {
        match self {
            Self::Wrapped { data } => data,
            Self::Bare(inner) => inner,
        }
    }
}
