use axum::response::Html;

static HOME_HTML: &str = include_str!("../web/home.html");
static BOOK_HTML: &str = include_str!("../web/book.html");
static CONFIRMATION_HTML: &str = include_str!("../web/confirmation.html");

pub async fn home_page() -> Html<&'static str> {
    Html(HOME_HTML)
}

pub async fn book_page() -> Html<&'static str> {
    Html(BOOK_HTML)
}

pub async fn confirmation_page() -> Html<&'static str> {
    Html(CONFIRMATION_HTML)
}
