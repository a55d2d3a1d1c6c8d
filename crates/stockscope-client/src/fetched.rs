/// Outcome of one API call, with the failure already logged.
///
/// Callers never receive a transport error; they get `Failed` with a short
/// reason instead, which keeps "nothing matched" (`Empty`) apart from "the
/// request itself went wrong".
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    Found(T),
    Empty,
    Failed(String),
}

/// Payloads that can come back empty-handed.
pub trait Payload {
    fn is_blank(&self) -> bool;
}

impl<T> Payload for Vec<T> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Payload> Fetched<T> {
    /// Log any error under `what` and tag the result.
    pub fn settle(result: anyhow::Result<T>, what: &str) -> Self {
        match result {
            Ok(data) if data.is_blank() => Fetched::Empty,
            Ok(data) => Fetched::Found(data),
            Err(e) => {
                log::error!("Error fetching {what}: {e:#}");
                Fetched::Failed(format!("{e:#}"))
            }
        }
    }
}

impl<T> Fetched<T> {
    pub fn found(self) -> Option<T> {
        match self {
            Fetched::Found(data) => Some(data),
            _ => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Fetched<U> {
        match self {
            Fetched::Found(data) => Fetched::Found(f(data)),
            Fetched::Empty => Fetched::Empty,
            Fetched::Failed(reason) => Fetched::Failed(reason),
        }
    }

    /// Collapse to the payload, degrading `Empty` and `Failed` alike to the empty default.
    pub fn into_inner(self) -> T
    where
        T: Default,
    {
        self.found().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn settle_tags_each_outcome() {
        assert_eq!(Fetched::settle(Ok(vec![1]), "numbers"), Fetched::Found(vec![1]));
        assert_eq!(Fetched::<Vec<u8>>::settle(Ok(vec![]), "numbers"), Fetched::Empty);
        match Fetched::<Vec<u8>>::settle(Err(anyhow!("connection refused")), "numbers") {
            Fetched::Failed(reason) => assert!(reason.contains("connection refused")),
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn into_inner_degrades_to_empty() {
        assert_eq!(Fetched::<Vec<u8>>::Failed("boom".into()).into_inner(), Vec::<u8>::new());
        assert_eq!(Fetched::Found(vec![3u8]).into_inner(), vec![3]);
    }
}
