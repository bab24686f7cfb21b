//! Наблюдатель событий конвейера: ядро само ничего не логирует,
//! все заметные события уходят через этот трэйт.

/// Неблокирующие события, не влияющие на результат обработки.
#[derive(Debug)]
pub enum Notice<'a> {
    /// Денежная строка не распарсилась, значение заменено нулём.
    CurrencyParseFailed { raw: &'a str },
    /// Сырая запись структурно битая, вместо неё — пустая заглушка.
    RecordMalformed { detail: String },
    /// Событие календаря пропущено (запись осталась в остальной обработке).
    EventSkipped {
        confirmation_code: &'a str,
        reason: &'static str,
    },
}

pub trait Observer {
    fn notify(&self, notice: Notice<'_>);
}

/// Заглушка по умолчанию: молча глотает события.
pub struct Noop;

impl Observer for Noop {
    fn notify(&self, _notice: Notice<'_>) {}
}
