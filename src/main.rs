use iced::alignment::Vertical;
use iced::border;
use iced::widget::pane_grid::{self, ResizeEvent};
use iced::widget::pick_list::PickList;
use iced::widget::{Button, Column, Container, Row, Scrollable, Text, container, text_input};
use iced::{Color, Element, Length, Task, Theme, application};
use mongodb::bson::Document;
use mongodb::sync::Client;
use std::env;
use std::sync::Arc;
use std::time::{Duration, Instant};

mod logging;
mod mongo;
mod session;
mod settings;
mod ui;

use mongo::{connection, filter};
use session::QuerySession;
use settings::AppSettings;
use ui::document_tree::DocumentTree;

const MONGO_URI_ENV: &str = "MONGO_URI";

fn main() -> iced::Result {
    let (app_settings, settings_error) = match settings::load_from_disk() {
        Ok(loaded) => (loaded, None),
        Err(error) => (AppSettings::default(), Some(error.to_string())),
    };
    logging::install(&app_settings);

    application(
        move || App::init(app_settings.clone(), settings_error.clone()),
        App::update,
        App::view,
    )
    .title("Mongo Pager")
    .theme(App::theme)
    .run()
}

struct App {
    mode: AppMode,
    handle: Option<Arc<Client>>,
    session: QuerySession,
    display_uri: String,
    filter_field: String,
    filter_value: String,
    filter_text: String,
    filter_error: Option<String>,
    page_input: String,
    status: Option<StatusLine>,
    has_run_query: bool,
    expand_first_result: bool,
    tree: DocumentTree,
    panes: pane_grid::State<PaneContent>,
}

#[derive(Debug, Clone)]
enum AppMode {
    Connecting,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone)]
enum StatusLine {
    Info(String),
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PaneContent {
    Sidebar,
    Main,
}

#[derive(Debug, Clone)]
enum Message {
    Connected(Result<Arc<Client>, String>),
    ShowDatabasesPressed,
    DatabasesLoaded(Result<Vec<String>, String>),
    DatabaseSelected(String),
    CollectionsLoaded { database: String, result: Result<Vec<String>, String> },
    CollectionSelected(String),
    FilterFieldChanged(String),
    FilterValueChanged(String),
    FilterTextChanged(String),
    RunQueryPressed,
    QueryCompleted { result: Result<Vec<Document>, String>, duration: Duration },
    PreviousPagePressed,
    NextPagePressed,
    PageInputChanged(String),
    GoToPagePressed,
    DocumentToggled(usize),
    PaneResized(ResizeEvent),
}

impl App {
    fn new(app_settings: &AppSettings) -> Self {
        let (mut panes, sidebar) = pane_grid::State::new(PaneContent::Sidebar);
        let (_main_pane, split) = panes
            .split(pane_grid::Axis::Vertical, sidebar, PaneContent::Main)
            .expect("failed to split pane grid");
        panes.resize(split, 0.3);

        Self {
            mode: AppMode::Connecting,
            handle: None,
            session: QuerySession::new(),
            display_uri: String::new(),
            filter_field: String::new(),
            filter_value: String::new(),
            filter_text: String::from("{}"),
            filter_error: None,
            page_input: String::new(),
            status: None,
            has_run_query: false,
            expand_first_result: app_settings.expand_first_result,
            tree: DocumentTree::empty(),
            panes,
        }
    }

    fn init(app_settings: AppSettings, settings_error: Option<String>) -> (Self, Task<Message>) {
        let mut app = App::new(&app_settings);
        if let Some(error) = settings_error {
            app.status = Some(StatusLine::Error(format!("Settings not loaded: {error}")));
        }

        match env::var(MONGO_URI_ENV) {
            Ok(uri) if !uri.trim().is_empty() => {
                let uri = uri.trim().to_string();
                app.display_uri = connection::display_uri(&uri);
                log::info!("Connecting to {}", app.display_uri);
                let task =
                    Task::perform(async move { connection::connect(&uri) }, Message::Connected);
                (app, task)
            }
            _ => {
                app.mode = AppMode::Failed(format!(
                    "The {MONGO_URI_ENV} environment variable is not set"
                ));
                (app, Task::none())
            }
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Connected(result) => {
                match result {
                    Ok(handle) => {
                        self.handle = Some(handle);
                        self.mode = AppMode::Ready;
                        log::info!("Connected to {}", self.display_uri);
                    }
                    Err(error) => {
                        log::error!("Connection failed: {error}");
                        self.mode = AppMode::Failed(error);
                    }
                }
                Task::none()
            }
            Message::ShowDatabasesPressed => {
                let Some(handle) = self.handle.clone() else {
                    return Task::none();
                };
                Task::perform(
                    async move { connection::list_databases(handle) },
                    Message::DatabasesLoaded,
                )
            }
            Message::DatabasesLoaded(result) => {
                match result {
                    Ok(names) => {
                        log::info!("Listed {} databases", names.len());
                        self.session.set_databases(names);
                        self.status = Some(StatusLine::Info(String::from(
                            "Databases loaded successfully",
                        )));
                    }
                    Err(error) => {
                        log::warn!("Listing databases failed: {error}");
                        self.session.clear_databases();
                        self.status =
                            Some(StatusLine::Error(format!("Error fetching database names: {error}")));
                    }
                }
                Task::none()
            }
            Message::DatabaseSelected(name) => {
                self.session.select_database(name.clone());
                let Some(handle) = self.handle.clone() else {
                    return Task::none();
                };
                let database = name.clone();
                Task::perform(
                    async move { connection::list_collections(handle, name) },
                    move |result| Message::CollectionsLoaded { database: database.clone(), result },
                )
            }
            Message::CollectionsLoaded { database, result } => {
                if self.session.selected_database() != Some(database.as_str()) {
                    return Task::none();
                }
                match result {
                    Ok(names) => self.session.set_collections(names),
                    Err(error) => {
                        log::warn!("Listing collections of {database} failed: {error}");
                        self.session.clear_collections();
                        self.status =
                            Some(StatusLine::Error(format!("Error fetching collections: {error}")));
                    }
                }
                Task::none()
            }
            Message::CollectionSelected(name) => {
                self.session.select_collection(name);
                Task::none()
            }
            Message::FilterFieldChanged(value) => {
                self.filter_field = value;
                self.refresh_filter_text();
                Task::none()
            }
            Message::FilterValueChanged(value) => {
                self.filter_value = value;
                self.refresh_filter_text();
                Task::none()
            }
            Message::FilterTextChanged(value) => {
                self.filter_error = filter::parse_filter(&value).err();
                self.filter_text = value;
                Task::none()
            }
            Message::RunQueryPressed => self.run_query_task(),
            Message::QueryCompleted { result, duration } => {
                match result {
                    Ok(documents) => {
                        let count = documents.len();
                        self.session.install_results(documents);
                        self.has_run_query = true;
                        self.page_input = String::from("1");
                        self.rebuild_tree();
                        let elapsed = format_duration(duration);
                        log::info!("Query returned {count} documents in {elapsed}");
                        self.status =
                            Some(StatusLine::Info(format!("{count} documents in {elapsed}")));
                    }
                    Err(error) => {
                        log::warn!("Query failed: {error}");
                        self.status = Some(StatusLine::Error(format!("Error fetching data: {error}")));
                    }
                }
                Task::none()
            }
            Message::PreviousPagePressed => {
                self.session.previous_page();
                self.sync_page_view();
                Task::none()
            }
            Message::NextPagePressed => {
                self.session.next_page();
                self.sync_page_view();
                Task::none()
            }
            Message::PageInputChanged(value) => {
                self.page_input = sanitize_numeric(&value);
                Task::none()
            }
            Message::GoToPagePressed => {
                if let Ok(page) = self.page_input.parse::<usize>() {
                    self.session.go_to_page(page.saturating_sub(1));
                    self.sync_page_view();
                }
                Task::none()
            }
            Message::DocumentToggled(node_id) => {
                self.tree.toggle(node_id);
                Task::none()
            }
            Message::PaneResized(event) => {
                self.panes.resize(event.split, event.ratio);
                Task::none()
            }
        }
    }

    fn run_query_task(&mut self) -> Task<Message> {
        let Some(handle) = self.handle.clone() else {
            return Task::none();
        };
        let (Some(database), Some(collection)) = (
            self.session.selected_database().map(String::from),
            self.session.selected_collection().map(String::from),
        ) else {
            self.status = Some(StatusLine::Error(String::from(
                "Select a database and a collection first",
            )));
            return Task::none();
        };

        // A malformed filter is reported and replaced by match-all, so the
        // run still proceeds.
        let parsed = match filter::parse_filter(&self.filter_text) {
            Ok(parsed) => {
                self.filter_error = None;
                parsed
            }
            Err(error) => {
                self.filter_error = Some(error);
                Document::new()
            }
        };
        self.session.set_filter(parsed);

        let filter = self.session.filter().clone();
        log::info!("Running find on {database}.{collection}");
        Task::perform(
            async move {
                let started = Instant::now();
                let result = connection::run_find(handle, database, collection, filter);
                (result, started.elapsed())
            },
            |(result, duration)| Message::QueryCompleted { result, duration },
        )
    }

    fn refresh_filter_text(&mut self) {
        self.filter_text = filter::default_filter_text(&self.filter_field, &self.filter_value);
        self.filter_error = None;
    }

    fn sync_page_view(&mut self) {
        self.page_input = (self.session.page_index() + 1).to_string();
        self.rebuild_tree();
    }

    fn rebuild_tree(&mut self) {
        self.tree = DocumentTree::from_documents(
            self.session.visible_page(),
            self.session.first_visible_ordinal(),
            self.expand_first_result,
        );
    }

    fn view(&self) -> Element<'_, Message> {
        match &self.mode {
            AppMode::Connecting => self.notice_view(format!("Connecting to {}...", self.display_uri)),
            AppMode::Failed(error) => self.failed_view(error),
            AppMode::Ready => {
                let grid = pane_grid::PaneGrid::new(&self.panes, |_, pane, _| match pane {
                    PaneContent::Sidebar => pane_grid::Content::new(self.sidebar_panel()),
                    PaneContent::Main => pane_grid::Content::new(self.main_panel()),
                })
                .on_resize(8, Message::PaneResized)
                .spacing(8)
                .height(Length::Fill);

                Container::new(grid)
                    .padding(8)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .into()
            }
        }
    }

    fn theme(&self) -> Theme {
        use iced::theme::Base;
        Theme::default(iced::theme::Mode::default())
    }

    fn notice_view(&self, message: String) -> Element<'_, Message> {
        Container::new(Text::new(message).size(16))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    fn failed_view(&self, error: &str) -> Element<'_, Message> {
        let card = Column::new()
            .spacing(12)
            .push(Text::new("Could not connect to MongoDB").size(20))
            .push(Text::new(self.display_uri.clone()).size(14))
            .push(Text::new(error.to_string()).size(14).color(error_color()))
            .push(
                Text::new(format!("Check the {MONGO_URI_ENV} connection settings and restart."))
                    .size(12),
            );

        let framed = Container::new(card).padding(24).width(Length::Fixed(480.0)).style(|_| {
            container::Style {
                border: border::rounded(8).width(1).color(Color::from_rgb8(0xd0, 0xd4, 0xda)),
                ..Default::default()
            }
        });

        Container::new(framed)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    fn sidebar_panel(&self) -> Element<'_, Message> {
        let mut column = Column::new().spacing(12);

        column = column.push(Text::new("MongoDB Configuration").size(18));
        column = column.push(
            Button::new(Text::new("Show All Databases"))
                .padding([6, 12])
                .on_press(Message::ShowDatabasesPressed),
        );

        column = column.push(Text::new("Database").size(14));
        column = column.push(
            PickList::new(
                self.session.databases(),
                self.session.selected_database().map(String::from),
                Message::DatabaseSelected,
            )
            .placeholder("Select a database")
            .width(Length::Fill),
        );

        column = column.push(Text::new("Collection").size(14));
        column = column.push(
            PickList::new(
                self.session.collections(),
                self.session.selected_collection().map(String::from),
                Message::CollectionSelected,
            )
            .placeholder("Select a collection")
            .width(Length::Fill),
        );

        column = column.push(Text::new("Filters").size(18));
        column = column.push(Text::new("Field").size(14));
        column = column.push(
            text_input("Field name", &self.filter_field)
                .on_input(Message::FilterFieldChanged)
                .padding([6, 12]),
        );
        column = column.push(Text::new("Value").size(14));
        column = column.push(
            text_input("Expected value", &self.filter_value)
                .on_input(Message::FilterValueChanged)
                .padding([6, 12]),
        );
        column = column.push(Text::new("Query").size(14));
        column = column.push(
            text_input("{}", &self.filter_text)
                .on_input(Message::FilterTextChanged)
                .padding([6, 12]),
        );
        if let Some(error) = &self.filter_error {
            column = column
                .push(Text::new(format!("Invalid query format: {error}")).size(12).color(error_color()));
        }

        let can_run = self.session.selected_database().is_some()
            && self.session.selected_collection().is_some();
        column = column.push(
            Button::new(Text::new("Run Query"))
                .padding([6, 12])
                .on_press_maybe(can_run.then_some(Message::RunQueryPressed)),
        );

        if let Some(status) = &self.status {
            let (message, color) = match status {
                StatusLine::Info(message) => (message, success_color()),
                StatusLine::Error(message) => (message, error_color()),
            };
            column = column.push(Text::new(message.clone()).size(13).color(color));
        }

        column = column
            .push(Text::new(format!("Total documents: {}", self.session.total_documents())).size(14));

        if self.session.total_pages() > 0 {
            let navigation = Row::new()
                .spacing(8)
                .align_y(Vertical::Center)
                .push(
                    Button::new(Text::new("Previous")).padding([4, 10]).on_press_maybe(
                        self.session.has_previous_page().then_some(Message::PreviousPagePressed),
                    ),
                )
                .push(
                    Text::new(format!(
                        "Page {} of {}",
                        self.session.page_index() + 1,
                        self.session.total_pages()
                    ))
                    .size(14),
                )
                .push(Button::new(Text::new("Next")).padding([4, 10]).on_press_maybe(
                    self.session.has_next_page().then_some(Message::NextPagePressed),
                ));

            let go_to = Row::new()
                .spacing(8)
                .align_y(Vertical::Center)
                .push(
                    text_input("Page", &self.page_input)
                        .on_input(Message::PageInputChanged)
                        .padding([4, 6])
                        .width(Length::Fixed(56.0)),
                )
                .push(
                    Button::new(Text::new("Go to Page"))
                        .padding([4, 10])
                        .on_press(Message::GoToPagePressed),
                );

            column = column.push(navigation).push(go_to);
        }

        Container::new(Scrollable::new(column).width(Length::Fill).height(Length::Fill))
            .padding(16)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(Self::pane_style)
            .into()
    }

    fn main_panel(&self) -> Element<'_, Message> {
        if !self.has_run_query {
            return Container::new(Text::new("Run a query to display documents"))
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .padding(16)
                .style(Self::pane_style)
                .into();
        }

        if self.session.total_documents() == 0 {
            return Container::new(Text::new("No documents matched the filter"))
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .padding(16)
                .style(Self::pane_style)
                .into();
        }

        let first = self.session.first_visible_ordinal();
        let last = first + self.session.visible_page().len() - 1;
        let header = Text::new(format!(
            "Documents {first} to {last} of {}",
            self.session.total_documents()
        ))
        .size(14);

        let layout = Column::new()
            .spacing(8)
            .push(header)
            .push(Scrollable::new(self.tree.view()).width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill);

        Container::new(layout)
            .padding(16)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(Self::pane_style)
            .into()
    }

    fn pane_style(theme: &Theme) -> container::Style {
        let palette = theme.extended_palette();

        container::Style {
            background: Some(palette.background.weak.color.into()),
            border: border::rounded(6).width(1).color(palette.primary.weak.color),
            ..Default::default()
        }
    }
}

fn error_color() -> Color {
    Color::from_rgb(0.85, 0.32, 0.33)
}

fn success_color() -> Color {
    Color::from_rgb(0.18, 0.55, 0.34)
}

fn sanitize_numeric(value: &str) -> String {
    let digits: String = value.chars().filter(|ch| ch.is_ascii_digit()).collect();
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() && !digits.is_empty() {
        String::from("0")
    } else {
        trimmed.to_string()
    }
}

fn format_duration(duration: Duration) -> String {
    if duration < Duration::from_secs(60) {
        format!("{:.3} s", duration.as_secs_f64())
    } else {
        let total_seconds = duration.as_secs();
        format!("{}:{:02} min", total_seconds / 60, total_seconds % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::{App, AppMode, Message, StatusLine, sanitize_numeric};
    use crate::settings::AppSettings;
    use mongodb::bson::{Document, doc};
    use mongodb::sync::Client;
    use std::sync::Arc;
    use std::time::Duration;

    fn ready_app() -> App {
        let mut app = App::new(&AppSettings::default());
        app.mode = AppMode::Ready;
        app.handle =
            Some(Arc::new(Client::with_uri_str("mongodb://127.0.0.1:27017").expect("local uri")));
        app
    }

    fn documents(count: usize) -> Vec<Document> {
        (0..count).map(|index| doc! { "n": index as i64 }).collect()
    }

    fn complete_query(app: &mut App, count: usize) {
        let _ = app.update(Message::QueryCompleted {
            result: Ok(documents(count)),
            duration: Duration::from_millis(5),
        });
    }

    #[test]
    fn loaded_databases_land_in_the_session_sorted() {
        let mut app = ready_app();
        let _ = app.update(Message::DatabasesLoaded(Ok(vec![
            String::from("shop"),
            String::from("admin"),
        ])));
        assert_eq!(app.session.databases(), ["admin", "shop"]);
        assert!(matches!(app.status, Some(StatusLine::Info(_))));
    }

    #[test]
    fn database_listing_errors_empty_the_list() {
        let mut app = ready_app();
        let _ = app.update(Message::DatabasesLoaded(Ok(vec![String::from("shop")])));
        let _ = app.update(Message::DatabasesLoaded(Err(String::from("server down"))));
        assert!(app.session.databases().is_empty());
        assert!(matches!(app.status, Some(StatusLine::Error(_))));
    }

    #[test]
    fn selecting_a_database_populates_its_collections() {
        let mut app = ready_app();
        let _ = app.update(Message::DatabaseSelected(String::from("shop")));
        let _ = app.update(Message::CollectionsLoaded {
            database: String::from("shop"),
            result: Ok(vec![String::from("users"), String::from("orders")]),
        });
        assert_eq!(app.session.collections(), ["orders", "users"]);
    }

    #[test]
    fn stale_collection_listings_are_discarded() {
        let mut app = ready_app();
        let _ = app.update(Message::DatabaseSelected(String::from("inventory")));
        let _ = app.update(Message::CollectionsLoaded {
            database: String::from("shop"),
            result: Ok(vec![String::from("orders")]),
        });
        assert!(app.session.collections().is_empty());
    }

    #[test]
    fn collection_listing_errors_empty_the_list() {
        let mut app = ready_app();
        let _ = app.update(Message::DatabaseSelected(String::from("shop")));
        let _ = app.update(Message::CollectionsLoaded {
            database: String::from("shop"),
            result: Ok(vec![String::from("orders")]),
        });
        let _ = app.update(Message::CollectionsLoaded {
            database: String::from("shop"),
            result: Err(String::from("not authorized")),
        });
        assert!(app.session.collections().is_empty());
        assert!(matches!(app.status, Some(StatusLine::Error(_))));
    }

    #[test]
    fn the_filter_text_follows_the_field_and_value_inputs() {
        let mut app = ready_app();
        let _ = app.update(Message::FilterFieldChanged(String::from("age")));
        assert_eq!(app.filter_text, "{}");
        let _ = app.update(Message::FilterValueChanged(String::from("30")));
        assert_eq!(app.filter_text, r#"{"age":"30"}"#);
        let _ = app.update(Message::FilterValueChanged(String::new()));
        assert_eq!(app.filter_text, "{}");
    }

    #[test]
    fn editing_the_query_text_validates_it_inline() {
        let mut app = ready_app();
        let _ = app.update(Message::FilterTextChanged(String::from("{not json")));
        assert!(app.filter_error.is_some());
        let _ = app.update(Message::FilterTextChanged(String::from(r#"{"age": 30}"#)));
        assert!(app.filter_error.is_none());
    }

    #[test]
    fn a_malformed_filter_is_reported_and_replaced_by_match_all() {
        let mut app = ready_app();
        let _ = app.update(Message::DatabaseSelected(String::from("shop")));
        let _ = app.update(Message::CollectionSelected(String::from("orders")));
        let _ = app.update(Message::FilterTextChanged(String::from("{broken")));
        let _ = app.update(Message::RunQueryPressed);
        assert!(app.filter_error.is_some());
        assert_eq!(app.session.filter(), &doc! {});
    }

    #[test]
    fn a_valid_filter_is_stored_on_run() {
        let mut app = ready_app();
        let _ = app.update(Message::DatabaseSelected(String::from("shop")));
        let _ = app.update(Message::CollectionSelected(String::from("orders")));
        let _ = app.update(Message::FilterTextChanged(String::from(r#"{"age": "30"}"#)));
        let _ = app.update(Message::RunQueryPressed);
        assert!(app.filter_error.is_none());
        assert_eq!(app.session.filter(), &doc! { "age": "30" });
    }

    #[test]
    fn query_completion_installs_results_and_rewinds_the_page() {
        let mut app = ready_app();
        complete_query(&mut app, 45);
        let _ = app.update(Message::NextPagePressed);
        assert_eq!(app.session.page_index(), 1);

        complete_query(&mut app, 45);
        assert_eq!(app.session.page_index(), 0);
        assert_eq!(app.page_input, "1");
        assert_eq!(app.session.total_documents(), 45);
        assert_eq!(app.session.total_pages(), 3);
        assert!(app.has_run_query);
    }

    #[test]
    fn a_failed_query_preserves_results_and_the_database_list() {
        let mut app = ready_app();
        let _ = app.update(Message::DatabasesLoaded(Ok(vec![String::from("shop")])));
        complete_query(&mut app, 45);

        let _ = app.update(Message::QueryCompleted {
            result: Err(String::from("cursor timeout")),
            duration: Duration::from_millis(5),
        });
        assert_eq!(app.session.total_documents(), 45);
        assert_eq!(app.session.databases(), ["shop"]);
        assert!(matches!(app.status, Some(StatusLine::Error(_))));
    }

    #[test]
    fn page_navigation_clamps_at_both_ends() {
        let mut app = ready_app();
        complete_query(&mut app, 45);

        let _ = app.update(Message::PreviousPagePressed);
        assert_eq!(app.session.page_index(), 0);

        let _ = app.update(Message::NextPagePressed);
        assert_eq!(app.session.page_index(), 1);
        assert_eq!(app.page_input, "2");

        let _ = app.update(Message::NextPagePressed);
        let _ = app.update(Message::NextPagePressed);
        assert_eq!(app.session.page_index(), 2);
    }

    #[test]
    fn go_to_page_uses_the_one_based_input_and_clamps() {
        let mut app = ready_app();
        complete_query(&mut app, 45);

        let _ = app.update(Message::PageInputChanged(String::from("3")));
        let _ = app.update(Message::GoToPagePressed);
        assert_eq!(app.session.page_index(), 2);

        let _ = app.update(Message::PageInputChanged(String::from("99")));
        let _ = app.update(Message::GoToPagePressed);
        assert_eq!(app.session.page_index(), 2);
        assert_eq!(app.page_input, "3");
    }

    #[test]
    fn page_input_keeps_only_digits() {
        assert_eq!(sanitize_numeric("12"), "12");
        assert_eq!(sanitize_numeric("a1b2"), "12");
        assert_eq!(sanitize_numeric("007"), "7");
        assert_eq!(sanitize_numeric("0"), "0");
        assert_eq!(sanitize_numeric("x"), "");
        assert_eq!(sanitize_numeric(""), "");
    }
}
