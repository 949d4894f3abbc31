// Command table of the landing page's toy terminal.

pub const RESUME_HREF: &str = "assets/resume.pdf";
pub const RESUME_FILENAME: &str = "Resume.pdf";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    DownloadResume,
    About,
    Skills,
    Contact,
    Clear,
}

impl Command {
    /// Look up a normalized (trimmed, lower-cased) command line.
    pub fn parse(line: &str) -> Option<Self> {
        match line {
            "help" => Some(Command::Help),
            "download --resume" => Some(Command::DownloadResume),
            "about" => Some(Command::About),
            "skills" => Some(Command::Skills),
            "contact" => Some(Command::Contact),
            "clear" => Some(Command::Clear),
            _ => None,
        }
    }
}

/// Side effect the host performs for a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    ClearOutput,
    Download {
        href: &'static str,
        filename: &'static str,
    },
    ScrollTo(&'static str),
}

/// How a reply is shown. Markup is inserted at once; plain text is typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Output {
    Markup(String),
    Typed(String),
}

impl Output {
    fn from_text(text: String) -> Self {
        if text.contains('<') {
            Output::Markup(text.replace('\n', "<br>"))
        } else {
            Output::Typed(text)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    /// Echo of the submitted line, shown after the prompt.
    pub echo: String,
    pub output: Option<Output>,
    pub effect: Option<Effect>,
}

/// Make user text safe to splice into markup.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Run one submitted line. Blank input yields `None`.
pub fn execute(raw: &str) -> Option<Reply> {
    let cmd = normalize(raw);
    if cmd.is_empty() {
        return None;
    }
    let (text, effect) = match Command::parse(&cmd) {
        Some(c) => run(c),
        None => (
            Some(format!(
                "Command not found: {}. Type <span class=\"terminal-cmd\">help</span> for available commands.",
                escape_html(&cmd)
            )),
            None,
        ),
    };
    Some(Reply {
        echo: raw.to_string(),
        output: text.map(Output::from_text),
        effect,
    })
}

fn run(cmd: Command) -> (Option<String>, Option<Effect>) {
    match cmd {
        Command::Help => (Some(help_text()), None),
        Command::DownloadResume => (
            Some("Downloading resume...".to_string()),
            Some(Effect::Download {
                href: RESUME_HREF,
                filename: RESUME_FILENAME,
            }),
        ),
        Command::About => (
            Some("Scrolling to About section...".to_string()),
            Some(Effect::ScrollTo("#about")),
        ),
        Command::Skills => (
            Some(
                "My skills:\n  • Scripting\n  • Python\n  • Django / FastAPI\n  • SQL\n  • Basic Linux"
                    .to_string(),
            ),
            None,
        ),
        Command::Contact => (
            Some(
                "Contact me:\n  Email: hello@example.com\n  GitHub: github.com\n  LinkedIn: linkedin.com"
                    .to_string(),
            ),
            None,
        ),
        Command::Clear => (None, Some(Effect::ClearOutput)),
    }
}

fn help_text() -> String {
    let rows = [
        ("help", "Show this help message"),
        ("download --resume", "Download my resume"),
        ("about", "Learn about me"),
        ("skills", "List my skills"),
        ("contact", "Get my contact info"),
        ("clear", "Clear the terminal"),
    ];
    let mut out = String::from("Available commands:");
    for (name, about) in rows {
        out.push_str(&format!(
            "\n  <span class=\"terminal-cmd\">{}</span>{} - {}",
            name,
            " ".repeat(18usize.saturating_sub(name.len())),
            about
        ));
    }
    out
}
