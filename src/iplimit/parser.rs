use super::types::LogEvent;
use regex::{Captures, Regex};

/// Ban record: whole-word `BAN`, then `[Email] = <token>`, then `[IP] = <token>`.
///
/// `\b` keeps `UNBAN`, `BANNED` and `BAN_LIST` from matching. The email token
/// must be followed by whitespace so it is always the maximal run.
const BAN_PATTERN: &str = r"\bBAN\b.*?\[Email\] = (\S*)\s.*?\[IP\] = (\S*)";

/// Unban record, same field layout as [`BAN_PATTERN`]
const UNBAN_PATTERN: &str = r"\bUNBAN\b.*?\[Email\] = (\S*)\s.*?\[IP\] = (\S*)";

/// Classifies ban log lines into [`LogEvent`]s.
///
/// Build one per aggregator and reuse it; the patterns are compiled once.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    ban: Regex,
    unban: Regex,
}

impl LineClassifier {
    pub fn new() -> Self {
        Self {
            ban: Regex::new(BAN_PATTERN).expect("Invalid ban pattern"),
            unban: Regex::new(UNBAN_PATTERN).expect("Invalid unban pattern"),
        }
    }

    /// Classify one line (without its trailing newline).
    ///
    /// Ban is tried first; a line is never both. Lines with a marker but
    /// missing either field are `Other`.
    pub fn classify<'a>(&self, line: &'a str) -> LogEvent<'a> {
        if let Some(caps) = self.ban.captures(line) {
            let (identity, address) = fields(&caps);
            return LogEvent::Ban { identity, address };
        }

        if let Some(caps) = self.unban.captures(line) {
            let (identity, address) = fields(&caps);
            return LogEvent::Unban { identity, address };
        }

        LogEvent::Other
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}

fn fields<'a>(caps: &Captures<'a>) -> (Option<&'a str>, Option<&'a str>) {
    (non_empty(caps, 1), non_empty(caps, 2))
}

fn non_empty<'a>(caps: &Captures<'a>, group: usize) -> Option<&'a str> {
    caps.get(group)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_ban() {
        let classifier = LineClassifier::new();
        let event = classifier.classify("2024 BAN [Email] = a@x.com [IP] = 1.1.1.1");
        assert_eq!(
            event,
            LogEvent::Ban {
                identity: Some("a@x.com"),
                address: Some("1.1.1.1"),
            }
        );
    }

    #[test]
    fn test_classify_unban_is_not_ban() {
        let classifier = LineClassifier::new();
        let event = classifier.classify("2024 UNBAN [Email] = a@x.com [IP] = 1.1.1.1");
        assert_eq!(
            event,
            LogEvent::Unban {
                identity: Some("a@x.com"),
                address: Some("1.1.1.1"),
            }
        );
    }

    #[test]
    fn test_classify_other() {
        let classifier = LineClassifier::new();
        assert_eq!(classifier.classify("noise line"), LogEvent::Other);
        assert_eq!(classifier.classify(""), LogEvent::Other);
    }

    #[test]
    fn test_empty_email_field() {
        let classifier = LineClassifier::new();
        let event = classifier.classify("BAN [Email] =  [IP] = 9.9.9.9");
        assert_eq!(
            event,
            LogEvent::Ban {
                identity: None,
                address: Some("9.9.9.9"),
            }
        );
    }
}
