//! Fixed user-facing texts. The bot talks Russian.

use yatrack_core::TrackInfo;

pub const WELCOME: &str = "👋 Привет! Я бот для извлечения информации о треках из Яндекс.Музыки.\n\n\
    📝 Просто отправьте мне ссылку на трек в формате:\n\
    https://music.yandex.ru/album/XXXXX/track/XXXXX\n\n\
    🎵 Я верну вам:\n\
    • Название трека\n\
    • Исполнителя\n\
    • Длительность\n\n\
    Попробуйте прямо сейчас!";

pub const HELP: &str = "🔍 Как использовать бота:\n\n\
    1. Найдите трек на Яндекс.Музыке\n\
    2. Скопируйте ссылку на трек\n\
    3. Отправьте её мне\n\n\
    Пример ссылки:\n\
    https://music.yandex.ru/album/12345/track/67890\n\n\
    Команды:\n\
    /start - Начать работу с ботом\n\
    /help - Показать это сообщение";

pub const INVALID_LINK: &str = "❌ Неверный формат ссылки!\n\n\
    Пожалуйста, отправьте ссылку в формате:\n\
    https://music.yandex.ru/album/XXXXX/track/XXXXX\n\n\
    Используйте /help для получения справки.";

pub const PROCESSING: &str = "🔄 Обрабатываю ссылку...";

pub const EXTRACTION_FAILED: &str = "❌ Не удалось извлечь информацию о треке.\n\n\
    Возможные причины:\n\
    • Неверная ссылка\n\
    • Трек недоступен\n\
    • Проблемы с подключением\n\n\
    Попробуйте другую ссылку или попробуйте позже.";

pub const INTERNAL_ERROR: &str = "Произошла ошибка при обработке вашего запроса.\n\
    Пожалуйста, попробуйте позже или отправьте другую ссылку.";

pub fn track_report(track: &TrackInfo) -> String {
    format!(
        "Информация о треке:\n\n\
         Название: {}\n\
         Исполнитель: {}\n\
         Длительность: {}\n\n\
         Ссылка: {}",
        track.title, track.artist, track.duration, track.url
    )
}

#[cfg(test)]
mod tests {
    use super::track_report;
    use yatrack_core::TrackInfo;

    #[test]
    fn report_lists_all_four_fields() {
        let report = track_report(&TrackInfo {
            title: "Song A".to_string(),
            artist: "Artist A".to_string(),
            duration: "3:05".to_string(),
            url: "https://music.yandex.ru/album/1/track/2".to_string(),
        });
        assert!(report.contains("Название: Song A"));
        assert!(report.contains("Исполнитель: Artist A"));
        assert!(report.contains("Длительность: 3:05"));
        assert!(report.contains("Ссылка: https://music.yandex.ru/album/1/track/2"));
    }
}
