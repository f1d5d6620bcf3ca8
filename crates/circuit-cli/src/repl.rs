//! Read-eval-print loop.

use std::io::{self, BufRead, Write};

use circuit_core::models::Response;
use circuit_session::DialogueEngine;

const HELP: &str = "\
命令：
  /back            返回上一步
  /reset           重置对话
  /results         查看当前全部结果
  /correct <文本>  纠正查询中的错别字
  /status          查看系统状态
  <数字>           选择对应编号的选项
  /quit            退出";

/// Last question's options, so a bare number can pick one.
#[derive(Default)]
struct Pending {
    options: Vec<String>,
}

pub fn run(engine: &DialogueEngine, session_id: &str) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut pending = Pending::default();

    writeln!(stdout, "{}\n\n{HELP}\n", engine.greet(session_id).content())?;
    write!(stdout, "> ")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            write!(stdout, "> ")?;
            stdout.flush()?;
            continue;
        }

        match input {
            "/quit" | "/exit" => break,
            "/help" => writeln!(stdout, "{HELP}")?,
            "/results" => writeln!(stdout, "{}", engine.current_results_summary(session_id))?,
            "/status" => match serde_json::to_string_pretty(&engine.status()) {
                Ok(json) => writeln!(stdout, "{json}")?,
                Err(e) => writeln!(stdout, "status unavailable: {e}")?,
            },
            _ if input.starts_with("/correct") => {
                let raw = input.trim_start_matches("/correct").trim();
                let correction = engine.correct_query(raw);
                writeln!(
                    stdout,
                    "{} → {}（{}）",
                    correction.original_query, correction.corrected_query, correction.explanation
                )?;
            }
            _ => {
                let response = match input.parse::<usize>().ok().and_then(|n| pending.pick(n)) {
                    Some(option) => engine.handle_option_selection(session_id, &option),
                    None => engine.handle_message(session_id, input),
                };
                pending.options = match &response {
                    Response::Question { options, .. } => options.clone(),
                    _ => Vec::new(),
                };
                render(&mut stdout, &response)?;
            }
        }
        write!(stdout, "> ")?;
        stdout.flush()?;
    }
    Ok(())
}

impl Pending {
    fn pick(&self, number: usize) -> Option<String> {
        number
            .checked_sub(1)
            .and_then(|i| self.options.get(i))
            .cloned()
    }
}

fn render(out: &mut impl Write, response: &Response) -> io::Result<()> {
    writeln!(out, "{}", response.content())?;
    if let Response::Question { options, .. } = response {
        for (i, option) in options.iter().enumerate() {
            writeln!(out, "  {}. {option}", i + 1)?;
        }
    }
    writeln!(out)
}
