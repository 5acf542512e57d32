//! Fixed texts of the Telegram surface and reply chunking.

/// Telegram rejects messages longer than this many characters.
pub const MAX_MESSAGE_LENGTH: usize = 4096;

pub const WELCOME_MESSAGE: &str = "
🇵🇹 Привет! Добро пожаловать в помощник португальского языка! 🇷🇺

Я могу помочь вам двумя способами:

1️⃣ **Спряжение глаголов**: Отправьте португальский глагол в любой форме, и я покажу все спряжения.
   Пример: \"falar\" или \"falou\" или \"falarei\"

2️⃣ **Исправление фраз**: Отправьте фразу на португальском языке, и я исправлю ошибки с объяснениями.
   Пример: \"Eu gosto muito de comer pizza\"

Напишите /help чтобы увидеть это сообщение снова.
";

pub const HELP_MESSAGE: &str = "
🆘 **Как использовать бота:**

📝 **Для спряжения глаголов:**
- Напишите любую форму португальского глагола
- Пример: \"correr\", \"corri\", \"correria\"

📝 **Для исправления фраз:**
- Напишите полную фразу на португальском языке
- Пример: \"Ontem eu foi ao mercado\"

🔧 **Доступные команды:**
/start - Запустить бота
/help - Показать эту справку

Отправьте любой текст, и я попробую определить, это глагол для спряжения или фраза для исправления!
";

pub const PROCESSING_FAILED: &str =
    "❌ Извините, произошла ошибка при обработке вашего сообщения. Попробуйте снова позже.";

/// Splits `content` into chunks of at most [`MAX_MESSAGE_LENGTH`] characters,
/// preferring line breaks, then spaces.
pub fn split_message(content: &str) -> Vec<String> {
    split_with_limit(content, MAX_MESSAGE_LENGTH)
}

fn split_with_limit(content: &str, limit: usize) -> Vec<String> {
    if content.chars().count() <= limit {
        return vec![content.to_string()];
    }

    let mut chunker = Chunker::new(limit);

    for line in content.split('\n') {
        if line.chars().count() <= limit {
            chunker.push(line, '\n');
            continue;
        }

        // The first piece of a line still joins the previous one with a newline.
        let mut sep = '\n';
        for word in line.split(' ') {
            if word.chars().count() <= limit {
                chunker.push(word, sep);
                sep = ' ';
                continue;
            }

            let chars: Vec<char> = word.chars().collect();
            for piece in chars.chunks(limit) {
                let piece: String = piece.iter().collect();
                chunker.push(&piece, sep);
                sep = ' ';
            }
        }
    }

    chunker.finish()
}

/// Accumulates pieces into chunks. A chunk is `open` once any piece, even an
/// empty line, has been placed in it, so blank lines keep their separators.
struct Chunker {
    limit: usize,
    parts: Vec<String>,
    current: String,
    len: usize,
    open: bool,
}

impl Chunker {
    fn new(limit: usize) -> Self {
        Self {
            limit,
            parts: Vec::new(),
            current: String::new(),
            len: 0,
            open: false,
        }
    }

    fn push(&mut self, piece: &str, sep: char) {
        let piece_len = piece.chars().count();
        let needed = if self.open { piece_len + 1 } else { piece_len };

        if self.open && self.len + needed > self.limit {
            // A lone blank line that cannot take the piece is dropped.
            self.flush();
        }
        if self.open {
            self.current.push(sep);
            self.len += 1;
        }
        self.current.push_str(piece);
        self.len += piece_len;
        self.open = true;
    }

    /// Telegram rejects whitespace-only messages, so those are never emitted.
    fn flush(&mut self) {
        let chunk = std::mem::take(&mut self.current);
        if !chunk.trim().is_empty() {
            self.parts.push(chunk);
        }
        self.len = 0;
        self.open = false;
    }

    fn finish(mut self) -> Vec<String> {
        self.flush();
        self.parts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_short_message_is_untouched() {
        assert_eq!(split_message("Eu falo"), vec!["Eu falo".to_string()]);
    }

    #[test]
    fn test_splits_on_lines() {
        let parts = split_with_limit("aaaa\nbbbb\ncccc", 9);
        assert_eq!(parts, vec!["aaaa\nbbbb".to_string(), "cccc".to_string()]);
    }

    #[test]
    fn test_long_line_splits_on_words() {
        let parts = split_with_limit("um dois tres quatro", 8);
        assert_eq!(
            parts,
            vec!["um dois".to_string(), "tres".to_string(), "quatro".to_string()]
        );
    }

    #[test]
    fn test_long_word_is_cut_by_characters() {
        let parts = split_with_limit("ççççççç", 3);
        assert_eq!(
            parts,
            vec!["ççç".to_string(), "ççç".to_string(), "ç".to_string()]
        );
    }

    #[test]
    fn test_every_part_respects_the_limit() {
        let line = "• Eles/Elas falaram\n".repeat(400);
        let parts = split_message(&line);
        assert!(parts.len() > 1);
        assert!(
            parts
                .iter()
                .all(|p| p.chars().count() <= MAX_MESSAGE_LENGTH)
        );
    }

    #[test]
    fn test_blank_line_at_chunk_start_is_kept() {
        let parts = split_with_limit("aaaa\n\nbb", 4);
        assert_eq!(parts, vec!["aaaa".to_string(), "\nbb".to_string()]);
    }

    #[test]
    fn test_trailing_newline_is_kept() {
        let parts = split_with_limit("aaaa\nbbbb\ncc\n", 9);
        assert_eq!(parts, vec!["aaaa\nbbbb".to_string(), "cc\n".to_string()]);
    }

    #[test]
    fn test_line_splits_rejoin_to_the_original() {
        let content = "**ГЛАГОЛ: FALAR**\n\n• Eu falo\n• Tu falas\n\n\n• Ele fala\n";
        for limit in 17..40 {
            let parts = split_with_limit(content, limit);
            assert_eq!(parts.join("\n"), content, "limit {}", limit);
        }
    }

    #[test]
    fn test_help_lists_commands() {
        assert!(HELP_MESSAGE.contains("/start"));
        assert!(HELP_MESSAGE.contains("/help"));
    }
}
