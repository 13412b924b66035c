use std::io::Write;

use pathmatch_search::ScoredPath;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Plain,
    WithScores,
    Json,
}

/// Score as a five-wide integer in ten-thousandths, truncated toward zero.
pub fn score_prefix(score: f64) -> String {
    format!("{:5}", (score * 1e4) as i64)
}

pub fn write_matches<W: Write>(
    out: &mut W,
    matches: &[ScoredPath],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Plain => {
            for m in matches {
                writeln!(out, "{}", m.path)?;
            }
        }
        OutputFormat::WithScores => {
            for m in matches {
                writeln!(out, "{} {}", score_prefix(m.score), m.path)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, matches)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<ScoredPath> {
        vec![
            ScoredPath {
                path: "a".to_string(),
                score: 1.0,
            },
            ScoredPath {
                path: "src/main".to_string(),
                score: 0.75,
            },
        ]
    }

    fn render(format: OutputFormat) -> String {
        let mut buf = Vec::new();
        write_matches(&mut buf, &sample(), format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn score_prefix_is_fixed_width_and_truncated() {
        assert_eq!(score_prefix(1.0), "10000");
        assert_eq!(score_prefix(0.75), " 7500");
        assert_eq!(score_prefix(0.28125), " 2812");
        assert_eq!(score_prefix(0.00001), "    0");
    }

    #[test]
    fn plain_lists_paths() {
        assert_eq!(render(OutputFormat::Plain), "a\nsrc/main\n");
    }

    #[test]
    fn scores_prefix_each_line() {
        assert_eq!(render(OutputFormat::WithScores), "10000 a\n 7500 src/main\n");
    }

    #[test]
    fn json_is_an_array_of_objects() {
        let value: serde_json::Value = serde_json::from_str(&render(OutputFormat::Json)).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                {"path": "a", "score": 1.0},
                {"path": "src/main", "score": 0.75}
            ])
        );
    }
}
