/// Query parameters understood by collection endpoints.
///
/// Values are passed through to the CMS query language untouched; for example
/// `orders("-publishedAt")` sorts newest first and `filters("category[equals]news")`
/// narrows by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionQuery {
    pub orders: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub filters: Option<String>,
    pub q: Option<String>,
    pub fields: Option<Vec<String>>,
    pub ids: Option<Vec<String>>,
    pub depth: Option<u8>,
    pub draft_key: Option<String>,
}

impl CollectionQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orders(mut self, orders: impl Into<String>) -> Self {
        self.orders = Some(orders.into());
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn filters(mut self, filters: impl Into<String>) -> Self {
        self.filters = Some(filters.into());
        self
    }

    pub fn search(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    pub fn ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn depth(mut self, depth: u8) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn draft_key(mut self, draft_key: impl Into<String>) -> Self {
        self.draft_key = Some(draft_key.into());
        self
    }

    /// Query-string pairs in a stable order, unset parameters omitted.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(draft_key) = &self.draft_key {
            pairs.push(("draftKey", draft_key.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }
        if let Some(orders) = &self.orders {
            pairs.push(("orders", orders.clone()));
        }
        if let Some(q) = &self.q {
            pairs.push(("q", q.clone()));
        }
        if let Some(fields) = &self.fields {
            pairs.push(("fields", fields.join(",")));
        }
        if let Some(ids) = &self.ids {
            pairs.push(("ids", ids.join(",")));
        }
        if let Some(filters) = &self.filters {
            pairs.push(("filters", filters.clone()));
        }
        if let Some(depth) = self.depth {
            pairs.push(("depth", depth.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_has_no_pairs() {
        assert!(CollectionQuery::new().to_pairs().is_empty());
    }

    #[test]
    fn builds_news_listing_query() {
        let pairs = CollectionQuery::new()
            .orders("-publishedAt")
            .limit(3)
            .fields(["id", "title", "date"])
            .to_pairs();
        assert_eq!(
            pairs,
            vec![
                ("limit", "3".to_string()),
                ("orders", "-publishedAt".to_string()),
                ("fields", "id,title,date".to_string()),
            ]
        );
    }
}
