use colored::Colorize;

pub struct Theme {
    pub header: fn(&str) -> String,
    pub name: fn(&str) -> String,
    pub code: fn(&str) -> String,
    pub text: fn(&str) -> String,
    pub error: fn(&str) -> String,
    pub ok_mark: fn(&str) -> String,
    pub line: fn(&str) -> String,
}

impl Theme {
    pub fn from_name(name: &str) -> Self {
        match name {
            "temp" | "" => Self::temp(),
            "wudao" => Self::wudao(),
            "canvas" => Self::canvas(),
            _ => {
                eprintln!("{}", format!("✘ Unknown theme: {}", name).red());
                Self::temp()
            }
        }
    }

    fn temp() -> Self {
        Self {
            header: |s| s.bright_magenta().italic().bold().underline().to_string(),
            name: |s| s.bright_white().bold().to_string(),
            code: |s| s.cyan().italic().to_string(),
            text: |s| s.white().to_string(),
            error: |s| s.red().italic().to_string(),
            ok_mark: |s| s.green().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
        }
    }

    fn wudao() -> Self {
        Self {
            header: |s| s.red().italic().bold().underline().to_string(),
            name: |s| s.cyan().bold().to_string(),
            code: |s| s.green().italic().to_string(),
            text: |s| s.bright_white().to_string(),
            error: |s| s.bright_yellow().dimmed().italic().to_string(),
            ok_mark: |s| s.green().italic().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
        }
    }

    fn canvas() -> Self {
        Self {
            header: |s| s.blue().bold().underline().to_string(),
            name: |s| s.magenta().bold().to_string(),
            code: |s| s.cyan().to_string(),
            text: |s| s.black().to_string(),
            error: |s| s.red().bold().to_string(),
            ok_mark: |s| s.bright_blue().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
        }
    }
}
