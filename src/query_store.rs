use crate::compat::String;
use crate::query_view::QueryView;

/// Accessor seam between the query machinery and the object that owns the
/// query text.
///
/// The text never includes the leading `?`. An empty string means the
/// query is absent entirely; hosts that serialize a full URL must drop the
/// `?` separator in that case.
pub trait QueryStore {
    /// Current query text, without the leading `?`
    fn query(&self) -> &str;

    /// Replace the stored query text
    fn set_query(&mut self, query: &str);
}

/// Plain query-text storage
impl QueryStore for String {
    fn query(&self) -> &str {
        self
    }

    fn set_query(&mut self, query: &str) {
        self.clear();
        self.push_str(query);
    }
}

#[cfg(feature = "url")]
impl QueryStore for url::Url {
    fn query(&self) -> &str {
        url::Url::query(self).unwrap_or("")
    }

    fn set_query(&mut self, query: &str) {
        if query.is_empty() {
            url::Url::set_query(self, None);
        } else {
            url::Url::set_query(self, Some(query));
        }
    }
}

/// Extension adding query manipulation to anything that stores query text
pub trait QueryStoreExt: QueryStore {
    /// Borrow a [`QueryView`] over this object's query text
    fn query_view(&mut self) -> QueryView<'_, Self> {
        QueryView::new(self)
    }
}

impl<S: QueryStore + ?Sized> QueryStoreExt for S {}
