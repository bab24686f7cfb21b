//! rentiolib — конвейер отчётности по броням аренды: нормализация сырых
//! записей платформы, фильтры, сортировка, сводная статистика и экспорт
//! в JSON/iCalendar.

pub mod error;
pub mod filter;
pub mod model;
pub mod money;
pub mod normalize;
pub mod observer;
pub mod sort;
pub mod summary;
pub mod traits;

pub mod formats {
    pub mod ical;
    pub mod json;
}
