//! Клиент приватного API платформы: постраничная выгрузка броней.

use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{error, info};

const BASE_URL: &str = "https://www.airbnb.com.br";
const PAGE_LIMIT: usize = 40;

pub struct ApiClient {
    http: Client,
    api_key: String,
    cookie: String,
    locale: String,
    currency: String,
}

/// Что удалось выгрузить. При обрыве связи `complete == false`,
/// но уже накопленные страницы возвращаются.
pub struct FetchOutcome {
    pub raw: Vec<Value>,
    pub complete: bool,
}

#[derive(Deserialize)]
struct Page {
    #[serde(default)]
    reservations: Vec<Value>,
}

impl ApiClient {
    pub fn new(api_key: String, cookie: String) -> Self {
        Self {
            http: Client::new(),
            api_key,
            cookie,
            locale: "pt".to_string(),
            currency: "BRL".to_string(),
        }
    }

    /// Последовательная пагинация: offset растёт на размер страницы,
    /// стоп на первой пустой странице или первой ошибке транспорта.
    pub fn fetch_reservations(&self) -> FetchOutcome {
        let mut offset = 0usize;
        let mut raw = Vec::new();
        let mut complete = true;

        loop {
            info!(offset, limit = PAGE_LIMIT, "fetching reservations page");
            let page = match self.fetch_page(offset) {
                Ok(page) => page,
                Err(e) => {
                    error!(error = %e, "transport failure, keeping partial result");
                    complete = false;
                    break;
                }
            };
            if page.is_empty() {
                break;
            }
            raw.extend(page);
            offset += PAGE_LIMIT;
        }

        info!(total = raw.len(), "retrieval finished");
        FetchOutcome { raw, complete }
    }

    fn fetch_page(&self, offset: usize) -> reqwest::Result<Vec<Value>> {
        let limit = PAGE_LIMIT.to_string();
        let offset = offset.to_string();
        let page: Page = self
            .http
            .get(format!("{BASE_URL}/api/v2/reservations"))
            .header("x-airbnb-api-key", &self.api_key)
            .header("cookie", &self.cookie)
            .query(&[
                ("locale", self.locale.as_str()),
                ("currency", self.currency.as_str()),
                ("_format", "for_remy"),
                ("_limit", limit.as_str()),
                ("_offset", offset.as_str()),
                ("collection_strategy", "for_reservations_list"),
                ("sort_field", "start_date"),
                ("sort_order", "desc"),
                ("status", "accepted,request,canceled"),
            ])
            .send()?
            .error_for_status()?
            .json()?;
        Ok(page.reservations)
    }
}
