//! Line-by-line redaction of env file content.
//!
//! The [`LineTransformer`] decides per line whether to pass it through, or to
//! replace the assigned value with a `<KEY>` placeholder. The mask region
//! state lives inside the transformer, so a fresh transformer is created for
//! every file.

use std::borrow::Cow;

use super::line::EnvLine;
use super::markers::Markers;

const BOM: char = '\u{feff}';

/// Options controlling redaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformOptions {
    /// Redact every assignment, regardless of markers.
    pub mask_all: bool,
}

/// Stateful per-file transformer.
///
/// # Example
///
/// ```
/// use examplenv::envfile::{LineTransformer, TransformOptions};
///
/// let mut transformer = LineTransformer::new(TransformOptions::default());
/// assert_eq!(transformer.transform_line("# !MASK-ON"), "# !MASK-ON");
/// assert_eq!(transformer.transform_line("APP_SECRET=ThisIsASecret"), "APP_SECRET=<APP_SECRET>");
/// assert_eq!(transformer.transform_line("# !MASK-OFF"), "# !MASK-OFF");
/// assert_eq!(transformer.transform_line("PORT=8080"), "PORT=8080");
/// ```
#[derive(Debug, Clone)]
pub struct LineTransformer {
    options: TransformOptions,
    masking: bool,
    redactions: usize,
}

impl LineTransformer {
    /// Create a transformer with the mask region closed.
    pub fn new(options: TransformOptions) -> Self {
        Self {
            options,
            masking: false,
            redactions: 0,
        }
    }

    /// Whether a mask region is currently open.
    pub fn is_masking(&self) -> bool {
        self.masking
    }

    /// Number of values redacted so far.
    pub fn redactions(&self) -> usize {
        self.redactions
    }

    /// Transform one line, updating the mask region state.
    pub fn transform_line<'a>(&mut self, raw: &'a str) -> Cow<'a, str> {
        let line = EnvLine::parse(raw);
        let markers = Markers::scan(line.comment());

        if markers.mask_on {
            self.masking = true;
        } else if markers.mask_off {
            self.masking = false;
        }
        // Region markers are kept as written unless the line is also `!SECRET`.
        if markers.is_region_marker() && !markers.secret {
            return Cow::Borrowed(raw);
        }

        let EnvLine::Assignment(assignment) = line else {
            return Cow::Borrowed(raw);
        };

        let redact = self.options.mask_all || self.masking || markers.secret;
        if redact && assignment.has_value() {
            self.redactions += 1;
            Cow::Owned(assignment.with_value(&placeholder(assignment.key())))
        } else {
            Cow::Borrowed(raw)
        }
    }
}

/// Placeholder written in place of a redacted value.
///
/// The key is uppercased and wrapped in angle brackets; nothing is escaped.
pub fn placeholder(key: &str) -> String {
    format!("<{}>", key.to_uppercase())
}

/// Header comment placed at the top of every generated example file.
pub fn header(source_name: &str) -> String {
    format!("# Example environment variables for {}", source_name)
}

/// Transform the lines of one file.
///
/// Mask region state starts closed and is dropped when this returns.
pub fn transform<'a, I>(lines: I, options: TransformOptions) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut transformer = LineTransformer::new(options);
    lines
        .into_iter()
        .map(|line| transformer.transform_line(line).into_owned())
        .collect()
}

/// A rendered example file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Full file content, header included.
    pub content: String,
    /// Number of values replaced by placeholders.
    pub redactions: usize,
}

/// Render `content` read from `source_name`, counting redactions.
///
/// A leading byte order mark is dropped. Lines are written with `\n` endings.
pub fn render(source_name: &str, content: &str, options: TransformOptions) -> Rendered {
    let content = content.strip_prefix(BOM).unwrap_or(content);
    let mut transformer = LineTransformer::new(options);
    let mut lines = vec![header(source_name)];
    lines.extend(
        content
            .lines()
            .map(|line| transformer.transform_line(line).into_owned()),
    );
    lines.push(String::new());

    Rendered {
        content: lines.join("\n"),
        redactions: transformer.redactions(),
    }
}

/// Render the full example file for `content` read from `source_name`.
///
/// The result starts with the [`header`] line and ends with a newline.
///
/// # Example
///
/// ```
/// use examplenv::envfile::{render_example, TransformOptions};
///
/// let rendered = render_example(
///     ".env",
///     "OPENAI_API_KEY=sk-abc123 # !SECRET\n",
///     TransformOptions::default(),
/// );
/// assert_eq!(
///     rendered,
///     "# Example environment variables for .env\nOPENAI_API_KEY=<OPENAI_API_KEY> # !SECRET\n"
/// );
/// ```
pub fn render_example(source_name: &str, content: &str, options: TransformOptions) -> String {
    render(source_name, content, options).content
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &[&str]) -> Vec<String> {
        transform(input.iter().copied(), TransformOptions::default())
    }

    #[test]
    fn non_assignment_lines_pass_through() {
        let input = [
            "",
            "   ",
            "# Database settings",
            "not an assignment",
            "=orphan",
            "\tindented comment # here",
        ];
        assert_eq!(run(&input), input);
    }

    #[test]
    fn unmarked_assignments_pass_through() {
        let input = ["PORT=8080", "  HOST = localhost  # bind address"];
        assert_eq!(run(&input), input);
    }

    #[test]
    fn secret_marker_redacts_line() {
        assert_eq!(
            run(&["OPENAI_API_KEY=sk-abc123 # !SECRET"]),
            ["OPENAI_API_KEY=<OPENAI_API_KEY> # !SECRET"]
        );
    }

    #[test]
    fn secret_marker_is_line_local() {
        let output = run(&["TOKEN=abc # !SECRET", "PORT=8080"]);
        assert_eq!(output, ["TOKEN=<TOKEN> # !SECRET", "PORT=8080"]);
    }

    #[test]
    fn secret_marker_inside_mask_region_redacts_once() {
        let output = run(&["# !MASK-ON", "TOKEN=abc # !SECRET", "# !MASK-OFF"]);
        assert_eq!(output[1], "TOKEN=<TOKEN> # !SECRET");
    }

    #[test]
    fn mask_region_redacts_enclosed_assignments() {
        let output = run(&[
            "BEFORE=visible",
            "# !MASK-ON",
            "APP_SECRET=ThisIsASecret",
            "DB_PASSWORD=hunter2",
            "# !MASK-OFF",
            "AFTER=visible",
        ]);
        assert_eq!(
            output,
            [
                "BEFORE=visible",
                "# !MASK-ON",
                "APP_SECRET=<APP_SECRET>",
                "DB_PASSWORD=<DB_PASSWORD>",
                "# !MASK-OFF",
                "AFTER=visible",
            ]
        );
    }

    #[test]
    fn unterminated_mask_region_runs_to_end_of_file() {
        let output = run(&["# !MASK-ON", "A=1", "", "# comment", "B=2"]);
        assert_eq!(output, ["# !MASK-ON", "A=<A>", "", "# comment", "B=<B>"]);
    }

    #[test]
    fn marker_lines_are_never_redacted() {
        let output = run(&["KEY=value # !MASK-ON", "OTHER=x", "LAST=y # !MASK-OFF"]);
        assert_eq!(
            output,
            ["KEY=value # !MASK-ON", "OTHER=<OTHER>", "LAST=y # !MASK-OFF"]
        );
    }

    #[test]
    fn secret_on_mask_off_line_is_redacted() {
        let output = run(&[
            "# !MASK-ON",
            "DB_PASS=hunter2 # !SECRET !MASK-OFF",
            "PORT=8080",
        ]);
        assert_eq!(
            output,
            [
                "# !MASK-ON",
                "DB_PASS=<DB_PASS> # !SECRET !MASK-OFF",
                "PORT=8080",
            ]
        );
    }

    #[test]
    fn secret_on_mask_on_line_is_redacted_and_opens_region() {
        let mut t = LineTransformer::new(TransformOptions::default());
        assert_eq!(
            t.transform_line("TOKEN=abc # !MASK-ON !SECRET"),
            "TOKEN=<TOKEN> # !MASK-ON !SECRET"
        );
        assert!(t.is_masking());
        assert_eq!(t.transform_line("NEXT=x"), "NEXT=<NEXT>");
        assert_eq!(t.redactions(), 2);
    }

    #[test]
    fn mask_off_without_mask_on_is_harmless() {
        assert_eq!(run(&["# !MASK-OFF", "A=1"]), ["# !MASK-OFF", "A=1"]);
    }

    #[test]
    fn placeholder_uppercases_key() {
        assert_eq!(run(&["api_key=abc # !SECRET"]), ["api_key=<API_KEY> # !SECRET"]);
        assert_eq!(placeholder("db.url"), "<DB.URL>");
    }

    #[test]
    fn redaction_preserves_surrounding_whitespace() {
        assert_eq!(
            run(&["  TOKEN =  abc   # !SECRET"]),
            ["  TOKEN =  <TOKEN>   # !SECRET"]
        );
    }

    #[test]
    fn empty_values_are_left_alone() {
        assert_eq!(run(&["# !MASK-ON", "EMPTY="]), ["# !MASK-ON", "EMPTY="]);
    }

    #[test]
    fn placeholder_lines_are_stable_on_second_pass() {
        let input = [
            "TOKEN=abc # !SECRET",
            "# !MASK-ON",
            "APP_SECRET=ThisIsASecret",
            "# !MASK-OFF",
            "PORT=8080",
        ];
        let once = run(&input);
        let twice = transform(once.iter().map(String::as_str), TransformOptions::default());
        assert_eq!(once, twice);
    }

    #[test]
    fn mask_all_redacts_every_assignment() {
        let output = transform(
            ["PORT=8080", "# comment", "HOST=localhost # bind"],
            TransformOptions { mask_all: true },
        );
        assert_eq!(output, ["PORT=<PORT>", "# comment", "HOST=<HOST> # bind"]);
    }

    #[test]
    fn mask_all_keeps_marker_lines() {
        let output = transform(["K=v # !MASK-ON"], TransformOptions { mask_all: true });
        assert_eq!(output, ["K=v # !MASK-ON"]);
    }

    #[test]
    fn transformer_tracks_mask_state() {
        let mut t = LineTransformer::new(TransformOptions::default());
        assert!(!t.is_masking());
        t.transform_line("# !MASK-ON");
        assert!(t.is_masking());
        t.transform_line("# !MASK-OFF");
        assert!(!t.is_masking());
    }

    #[test]
    fn counts_redactions() {
        let mut t = LineTransformer::new(TransformOptions::default());
        for line in ["A=1 # !SECRET", "B=2", "# !MASK-ON", "C=3", "D="] {
            t.transform_line(line);
        }
        assert_eq!(t.redactions(), 2);
    }

    #[test]
    fn render_reports_redaction_count() {
        let rendered = render(".env", "A=1\nB=2 # !SECRET\n", TransformOptions::default());
        assert_eq!(rendered.redactions, 1);
        assert!(rendered.content.ends_with("B=<B> # !SECRET\n"));
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(run(&[]).is_empty());
    }

    #[test]
    fn render_example_empty_content_is_header_only() {
        assert_eq!(
            render_example(".env.dev", "", TransformOptions::default()),
            "# Example environment variables for .env.dev\n"
        );
    }

    #[test]
    fn render_example_keeps_blank_lines() {
        let content = "# App\nNAME=demo\n\n# !MASK-ON\nAPP_SECRET=ThisIsASecret\n# !MASK-OFF\n";
        let rendered = render_example(".env", content, TransformOptions::default());
        assert_eq!(
            rendered,
            "# Example environment variables for .env\n\
             # App\n\
             NAME=demo\n\
             \n\
             # !MASK-ON\n\
             APP_SECRET=<APP_SECRET>\n\
             # !MASK-OFF\n"
        );
    }

    #[test]
    fn crlf_input_renders_with_lf_endings() {
        let rendered = render_example(
            ".env",
            "A=1 # !SECRET\r\nB=2\r\n",
            TransformOptions::default(),
        );
        assert_eq!(
            rendered,
            "# Example environment variables for .env\nA=<A> # !SECRET\nB=2\n"
        );
        assert!(!rendered.contains('\r'));
    }

    #[test]
    fn leading_byte_order_mark_is_dropped() {
        let rendered = render_example(
            ".env",
            "\u{feff}KEY=v # !SECRET\n",
            TransformOptions::default(),
        );
        assert_eq!(
            rendered,
            "# Example environment variables for .env\nKEY=<KEY> # !SECRET\n"
        );
    }

    #[test]
    fn mask_state_does_not_leak_between_files() {
        let first = render_example(".env", "# !MASK-ON\nA=1\n", TransformOptions::default());
        let second = render_example(".env.dev", "A=1\n", TransformOptions::default());
        assert!(first.contains("A=<A>"));
        assert!(second.contains("A=1"));
    }
}
