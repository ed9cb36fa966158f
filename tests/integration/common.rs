use folio_scraper::config::{Config, ScrapeMode};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Default config pointed at a mock server
pub fn test_config(mode: ScrapeMode, base_url: &str) -> Config {
    let mut config = Config::default();
    config.server.mode = mode;
    config.http.user_agent = "TestScraper/1.0".to_string();
    config.http.timeout_secs = 5;
    config.http.connect_timeout_secs = 2;
    config.single.base_url = base_url.to_string();
    config
}

/// Index page whose panel holds the given anchors
pub fn index_page(anchors: &str) -> String {
    format!(
        r#"<html><head><title>Compilación</title></head><body>
        <div class="panel-lista-opciones-nivel-02">{}</div>
        </body></html>"#,
        anchors
    )
}

/// Document page with a heading and content container
pub fn document_page(heading: &str, text: &str) -> String {
    format!(
        r#"<html><head><title>{heading} - Gestor Normativo Alejandra 2.0</title></head><body>
        <div class="menu">Menú</div>
        <h1>{heading}</h1>
        <div class="panel-documento"><p>{text}</p></div>
        </body></html>"#
    )
}

pub async fn mount_html(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .mount(server)
        .await;
}

pub async fn mount_status(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}
