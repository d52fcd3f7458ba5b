use shared::catalog::{ApiCall, RouteConvention};

use crate::ConsoleSession;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Output(String),
    Quit,
}

pub const HELP: &str = "\
commands:
  method <verb>          set the request method
  endpoint <path>        set the request path
  body <json>            set the request body (no value clears it)
  token <value>          set the token sent as the Authorization header
  send                   dispatch the form and print the response
  show                   print every form field
  routes [classic|rest]  show or switch the pre-fill route convention
  clear, register, login, logout, list, create, join
                         pre-fill a sample request for one API call
  help                   print this list
  quit                   leave the console
";

impl ConsoleSession {
    /// Interprets one console line. The command word is case-insensitive;
    /// everything after it is taken verbatim, so bodies and tokens keep
    /// their casing.
    pub async fn eval(&mut self, line: &str) -> Reply {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Reply::Output(String::new());
        }
        let (word, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (trimmed, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "help" => Reply::Output(HELP.to_string()),
            "quit" => Reply::Quit,
            "show" => Reply::Output(self.render_form()),
            "method" => {
                self.form.method = rest.to_ascii_uppercase();
                Reply::Output(field_line("method", &self.form.method))
            }
            "endpoint" => {
                self.form.endpoint = rest.to_string();
                Reply::Output(field_line("endpoint", &self.form.endpoint))
            }
            "body" => {
                self.form.body = rest.to_string();
                Reply::Output(field_line("body", &self.form.body))
            }
            "token" => {
                self.form.token = rest.to_string();
                Reply::Output(field_line("token", &self.form.token))
            }
            "send" => {
                if self.submit().await {
                    Reply::Output(self.form.response.clone())
                } else {
                    Reply::Output("set method and endpoint before sending".to_string())
                }
            }
            "routes" => {
                if rest.is_empty() {
                    Reply::Output(format!("routes: {}", self.convention()))
                } else {
                    match rest.parse::<RouteConvention>() {
                        Ok(convention) => {
                            self.set_convention(convention);
                            Reply::Output(format!("routes: {convention}"))
                        }
                        Err(err) => Reply::Output(err.to_string()),
                    }
                }
            }
            other => match ApiCall::from_word(other) {
                Some(call) => {
                    self.prefill(call);
                    Reply::Output(self.render_form())
                }
                None => Reply::Output(HELP.to_string()),
            },
        }
    }

    fn render_form(&self) -> String {
        [
            field_line("method", &self.form.method),
            field_line("endpoint", &self.form.endpoint),
            field_line("body", &self.form.body),
            field_line("token", &self.form.token),
            field_line("response", &self.form.response),
        ]
        .join("\n")
    }
}

fn field_line(name: &str, value: &str) -> String {
    if value.is_empty() {
        format!("{name}: (empty)")
    } else if value.contains('\n') {
        format!("{name}:\n{}", indent(value))
    } else {
        format!("{name}: {value}")
    }
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("  {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "tests/eval_tests.rs"]
mod tests;
