//! Looping type-and-delete animation for the introduction headline.

use std::time::Duration;

const DEFAULT_TYPE_DELAY_MS: u64 = 70;
const DEFAULT_DELETE_DELAY_MS: u64 = 50;
const DEFAULT_HOLD_DELAY_MS: u64 = 1_500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypewriterTiming {
    pub type_delay: Duration,
    pub delete_delay: Duration,
    pub hold_delay: Duration,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_delay: Duration::from_millis(DEFAULT_TYPE_DELAY_MS),
            delete_delay: Duration::from_millis(DEFAULT_DELETE_DELAY_MS),
            hold_delay: Duration::from_millis(DEFAULT_HOLD_DELAY_MS),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Holding,
    Deleting,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Typewriter {
    words: Vec<&'static str>,
    word_index: usize,
    visible_chars: usize,
    phase: Phase,
    timing: TypewriterTiming,
}

impl Typewriter {
    pub fn new(words: &[&'static str], timing: TypewriterTiming) -> Self {
        Self {
            words: words.to_vec(),
            word_index: 0,
            visible_chars: 0,
            phase: Phase::Typing,
            timing,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[cfg(test)]
    pub fn word_index(&self) -> usize {
        self.word_index
    }

    pub fn text(&self) -> &str {
        let Some(word) = self.words.get(self.word_index) else {
            return "";
        };

        match word.char_indices().nth(self.visible_chars) {
            Some((end, _)) => &word[..end],
            None => word,
        }
    }

    /// Advances one step and returns the delay before the next call.
    pub fn tick(&mut self) -> Duration {
        let Some(word) = self.words.get(self.word_index) else {
            return self.timing.hold_delay;
        };
        let word_len = word.chars().count();

        match self.phase {
            Phase::Typing => {
                if self.visible_chars < word_len {
                    self.visible_chars += 1;
                }
                if self.visible_chars >= word_len {
                    self.phase = Phase::Holding;
                    self.timing.hold_delay
                } else {
                    self.timing.type_delay
                }
            }
            Phase::Holding => {
                self.phase = Phase::Deleting;
                self.timing.delete_delay
            }
            Phase::Deleting => {
                self.visible_chars = self.visible_chars.saturating_sub(1);
                if self.visible_chars == 0 {
                    self.word_index = (self.word_index + 1) % self.words.len();
                    self.phase = Phase::Typing;
                    self.timing.type_delay
                } else {
                    self.timing.delete_delay
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timing() -> TypewriterTiming {
        TypewriterTiming::default()
    }

    #[test]
    fn types_holds_deletes_then_moves_on() {
        let mut typewriter = Typewriter::new(&["Rust", "Go"], timing());

        assert_eq!(typewriter.tick(), Duration::from_millis(70));
        assert_eq!(typewriter.text(), "R");
        typewriter.tick();
        typewriter.tick();
        assert_eq!(typewriter.tick(), Duration::from_millis(1_500));
        assert_eq!(typewriter.text(), "Rust");
        assert_eq!(typewriter.phase(), Phase::Holding);

        assert_eq!(typewriter.tick(), Duration::from_millis(50));
        assert_eq!(typewriter.text(), "Rust");
        typewriter.tick();
        assert_eq!(typewriter.text(), "Rus");
        typewriter.tick();
        typewriter.tick();
        assert_eq!(typewriter.tick(), Duration::from_millis(70));
        assert_eq!(typewriter.text(), "");
        assert_eq!(typewriter.word_index(), 1);
    }

    #[test]
    fn wraps_back_to_first_word() {
        let mut typewriter = Typewriter::new(&["ab"], timing());
        for _ in 0..5 {
            typewriter.tick();
        }
        assert_eq!(typewriter.word_index(), 0);
        assert_eq!(typewriter.phase(), Phase::Typing);
        typewriter.tick();
        assert_eq!(typewriter.text(), "a");
    }

    #[test]
    fn multibyte_words_slice_on_char_boundaries() {
        let mut typewriter = Typewriter::new(&["añb"], timing());
        typewriter.tick();
        typewriter.tick();
        assert_eq!(typewriter.text(), "añ");
    }

    #[test]
    fn empty_word_list_is_inert() {
        let mut typewriter = Typewriter::new(&[], timing());
        assert_eq!(typewriter.tick(), Duration::from_millis(1_500));
        assert_eq!(typewriter.text(), "");
    }
}
