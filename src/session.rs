use mongodb::bson::Document;

pub const PAGE_SIZE: usize = 20;

/// Per-window query state: the enumerated names, the current selection, the
/// parsed filter, and the materialized result set with its page cursor.
#[derive(Debug, Default)]
pub struct QuerySession {
    databases: Vec<String>,
    collections: Vec<String>,
    selected_database: Option<String>,
    selected_collection: Option<String>,
    filter: Document,
    results: Vec<Document>,
    page_index: usize,
}

impl QuerySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn databases(&self) -> &[String] {
        &self.databases
    }

    pub fn set_databases(&mut self, mut names: Vec<String>) {
        names.sort_unstable();
        let selection_gone =
            self.selected_database.as_ref().is_some_and(|selected| !names.contains(selected));
        if selection_gone {
            self.clear_database_selection();
        }
        self.databases = names;
    }

    pub fn clear_databases(&mut self) {
        self.databases.clear();
    }

    pub fn collections(&self) -> &[String] {
        &self.collections
    }

    pub fn set_collections(&mut self, mut names: Vec<String>) {
        names.sort_unstable();
        let selection_gone =
            self.selected_collection.as_ref().is_some_and(|selected| !names.contains(selected));
        if selection_gone {
            self.selected_collection = None;
        }
        self.collections = names;
    }

    pub fn clear_collections(&mut self) {
        self.collections.clear();
        self.selected_collection = None;
    }

    pub fn selected_database(&self) -> Option<&str> {
        self.selected_database.as_deref()
    }

    /// Changing the database invalidates the collection list until the new
    /// one is fetched.
    pub fn select_database(&mut self, name: String) {
        if self.selected_database.as_deref() == Some(name.as_str()) {
            return;
        }
        self.selected_database = Some(name);
        self.clear_collections();
    }

    fn clear_database_selection(&mut self) {
        self.selected_database = None;
        self.clear_collections();
    }

    pub fn selected_collection(&self) -> Option<&str> {
        self.selected_collection.as_deref()
    }

    pub fn select_collection(&mut self, name: String) {
        self.selected_collection = Some(name);
    }

    pub fn filter(&self) -> &Document {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: Document) {
        self.filter = filter;
    }

    /// Replaces the result set wholesale and rewinds the cursor to the first
    /// page. The database and collection lists are left untouched.
    pub fn install_results(&mut self, documents: Vec<Document>) {
        self.results = documents;
        self.page_index = 0;
    }

    pub fn total_documents(&self) -> usize {
        self.results.len()
    }

    pub fn total_pages(&self) -> usize {
        self.results.len().div_ceil(PAGE_SIZE)
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn has_previous_page(&self) -> bool {
        self.page_index > 0
    }

    pub fn has_next_page(&self) -> bool {
        self.page_index + 1 < self.total_pages()
    }

    /// Out-of-range requests clamp to the last page; with no results the
    /// cursor stays at zero.
    pub fn go_to_page(&mut self, page: usize) {
        self.page_index = page.min(self.total_pages().saturating_sub(1));
    }

    pub fn next_page(&mut self) {
        if self.has_next_page() {
            self.page_index += 1;
        }
    }

    pub fn previous_page(&mut self) {
        if self.has_previous_page() {
            self.page_index -= 1;
        }
    }

    /// The slice of the result set currently on screen, recomputed from the
    /// stored cursor on every call.
    pub fn visible_page(&self) -> &[Document] {
        let start = self.page_index * PAGE_SIZE;
        if start >= self.results.len() {
            return &[];
        }
        let end = (start + PAGE_SIZE).min(self.results.len());
        &self.results[start..end]
    }

    /// One-based ordinal of the first document on the visible page, for
    /// absolute numbering across pages.
    pub fn first_visible_ordinal(&self) -> usize {
        self.page_index * PAGE_SIZE + 1
    }
}

#[cfg(test)]
mod tests {
    use super::{PAGE_SIZE, QuerySession};
    use mongodb::bson::doc;

    fn documents(count: usize) -> Vec<mongodb::bson::Document> {
        (0..count).map(|index| doc! { "n": index as i64 }).collect()
    }

    fn session_with_results(count: usize) -> QuerySession {
        let mut session = QuerySession::new();
        session.install_results(documents(count));
        session
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(session_with_results(0).total_pages(), 0);
        assert_eq!(session_with_results(1).total_pages(), 1);
        assert_eq!(session_with_results(20).total_pages(), 1);
        assert_eq!(session_with_results(21).total_pages(), 2);
        assert_eq!(session_with_results(45).total_pages(), 3);
    }

    #[test]
    fn full_pages_hold_page_size_documents() {
        let mut session = session_with_results(45);
        assert_eq!(session.visible_page().len(), PAGE_SIZE);
        session.next_page();
        assert_eq!(session.visible_page().len(), PAGE_SIZE);
    }

    #[test]
    fn last_page_holds_the_remainder() {
        let mut session = session_with_results(45);
        session.go_to_page(2);
        assert_eq!(session.visible_page().len(), 5);
    }

    #[test]
    fn install_results_rewinds_the_cursor() {
        let mut session = session_with_results(45);
        session.go_to_page(2);
        session.install_results(documents(45));
        assert_eq!(session.page_index(), 0);
    }

    #[test]
    fn empty_results_keep_the_cursor_at_zero() {
        let mut session = session_with_results(45);
        session.go_to_page(2);
        session.install_results(Vec::new());
        assert_eq!(session.page_index(), 0);
        assert!(session.visible_page().is_empty());
    }

    #[test]
    fn go_to_page_is_idempotent() {
        let mut session = session_with_results(45);
        session.go_to_page(1);
        let first: Vec<_> = session.visible_page().to_vec();
        session.go_to_page(1);
        assert_eq!(session.visible_page(), first.as_slice());
    }

    #[test]
    fn go_to_page_clamps_to_the_last_page() {
        let mut session = session_with_results(45);
        session.go_to_page(99);
        assert_eq!(session.page_index(), 2);

        let mut empty = QuerySession::new();
        empty.go_to_page(7);
        assert_eq!(empty.page_index(), 0);
    }

    #[test]
    fn previous_at_the_first_page_is_a_no_op() {
        let mut session = session_with_results(45);
        assert!(!session.has_previous_page());
        session.previous_page();
        assert_eq!(session.page_index(), 0);
    }

    #[test]
    fn next_at_the_last_page_is_a_no_op() {
        let mut session = session_with_results(45);
        session.go_to_page(2);
        assert!(!session.has_next_page());
        session.next_page();
        assert_eq!(session.page_index(), 2);
    }

    #[test]
    fn next_page_shows_documents_21_through_40() {
        let mut session = session_with_results(45);
        session.next_page();
        assert_eq!(session.page_index(), 1);
        assert_eq!(session.first_visible_ordinal(), 21);

        let page = session.visible_page();
        assert_eq!(page.len(), 20);
        assert_eq!(page[0].get_i64("n").unwrap(), 20);
        assert_eq!(page[19].get_i64("n").unwrap(), 39);
    }

    #[test]
    fn selecting_a_database_clears_the_collection_list() {
        let mut session = QuerySession::new();
        session.select_database(String::from("shop"));
        session.set_collections(vec![String::from("users"), String::from("orders")]);
        session.select_collection(String::from("orders"));
        assert_eq!(session.collections(), ["orders", "users"]);

        session.select_database(String::from("inventory"));
        assert!(session.collections().is_empty());
        assert_eq!(session.selected_collection(), None);
    }

    #[test]
    fn reselecting_the_same_database_keeps_the_collections() {
        let mut session = QuerySession::new();
        session.select_database(String::from("shop"));
        session.set_collections(vec![String::from("orders")]);
        session.select_database(String::from("shop"));
        assert_eq!(session.collections(), ["orders"]);
    }

    #[test]
    fn installing_results_leaves_the_database_list_alone() {
        let mut session = QuerySession::new();
        session.set_databases(vec![String::from("shop"), String::from("admin")]);
        session.install_results(documents(3));
        assert_eq!(session.databases(), ["admin", "shop"]);
    }

    #[test]
    fn set_databases_drops_a_vanished_selection() {
        let mut session = QuerySession::new();
        session.select_database(String::from("legacy"));
        session.set_collections(vec![String::from("logs")]);
        session.set_databases(vec![String::from("shop")]);
        assert_eq!(session.selected_database(), None);
        assert!(session.collections().is_empty());
    }
}
