/// Ordered set of endpoint paths fetched together in one load cycle.
///
/// Order carries no meaning for the backend; it pairs results positionally,
/// fixes bundle iteration order and breaks ties between failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateRequestSet {
    endpoints: Vec<String>,
}

impl AggregateRequestSet {
    /// Builds a set; repeated endpoints keep their first position.
    pub fn new<I, S>(endpoints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for endpoint in endpoints {
            let endpoint = endpoint.into();
            if !unique.contains(&endpoint) {
                unique.push(endpoint);
            }
        }
        Self { endpoints: unique }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.endpoints.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_keep_first_position() {
        let set = AggregateRequestSet::new(["sales/trends", "sales/overview", "sales/trends"]);
        assert_eq!(set.len(), 2);
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec!["sales/trends", "sales/overview"]
        );
    }
}
