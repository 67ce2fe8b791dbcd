// Tribute content
// The static text sections of the greeting page, customizable via settings

use serde::{Deserialize, Serialize};

/// Everything the shell renders besides the live counters. Kept as plain
/// data so the whole tribute can be rewritten from the settings file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TributeContent {
    pub greeting: String,
    pub hero_subtitle: String,
    pub surprise_label: String,
    pub gallery_title: String,
    pub gallery_captions: Vec<String>,
    pub letter_title: String,
    pub letter_paragraphs: Vec<String>,
    pub gift_title: String,
    pub gift_message: String,
    pub gift_footnote: String,
    pub closing_headline: String,
    pub closing_lines: Vec<String>,
}

impl Default for TributeContent {
    fn default() -> Self {
        Self {
            greeting: "Happy Birthday".to_string(),
            hero_subtitle: "You make my world brighter every day. \
                            I'm so lucky to have you in my life."
                .to_string(),
            surprise_label: "Click for Surprise 🎉".to_string(),
            gallery_title: "Our Memories 📸".to_string(),
            gallery_captions: vec![
                "A favorite moment with you.".to_string(),
                "That afternoon we lost track of time.".to_string(),
                "Laughing until neither of us could breathe.".to_string(),
                "The quiet morning that felt like forever.".to_string(),
                "Our first adventure together.".to_string(),
                "Just us, exactly as it should be.".to_string(),
            ],
            letter_title: "A Message For You 💌".to_string(),
            letter_paragraphs: vec![
                "Every moment with you is a blessing. Thank you for filling \
                 my life with joy, patience, and the warmest love."
                    .to_string(),
                "On your special day, I wish you endless giggles, cozy \
                 nights, new adventures, and dreams that come true."
                    .to_string(),
                "You are my favorite hello and hardest goodbye. Forever \
                 yours. ❤️"
                    .to_string(),
            ],
            gift_title: "A Little Gift For You 🎁".to_string(),
            gift_message: "Surprise! You are my greatest gift 💝".to_string(),
            gift_footnote: "Today and always, I choose you. Here's to a \
                            lifetime of birthdays together."
                .to_string(),
            closing_headline: "I love you to the moon 🌙 and back 💫".to_string(),
            closing_lines: vec![
                "Forever and always.".to_string(),
                "You are my universe 🌌".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_content_has_every_section() {
        let content = TributeContent::default();
        assert!(!content.greeting.is_empty());
        assert!(!content.gallery_captions.is_empty());
        assert!(!content.letter_paragraphs.is_empty());
        assert!(!content.gift_message.is_empty());
        assert!(!content.closing_lines.is_empty());
    }
}
