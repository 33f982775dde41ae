use std::io::{self, Write};

pub fn prompt(message: &str) {
    println!("=> {}", message);
}

pub fn read_line() -> String {
    let mut buffer = String::new();
    let _ = io::stdin().read_line(&mut buffer);
    buffer.trim().to_string()
}

/// Prompts until the answer matches one of the options (compared in
/// lowercase).
pub fn input<S: AsRef<str>>(message: &str, options: &[S]) -> String {
    prompt(message);
    loop {
        let answer = read_line().to_lowercase();
        if options.iter().any(|option| option.as_ref() == answer) {
            return answer;
        }
        prompt(&format!("Please enter {}.", joiner(options, ", ", "or")));
    }
}

pub fn joiner<S: AsRef<str>>(items: &[S], delimiter: &str, conjunction: &str) -> String {
    match items.len() {
        0 => String::new(),
        1 => items[0].as_ref().to_string(),
        2 => format!("{} {} {}", items[0].as_ref(), conjunction, items[1].as_ref()),
        _ => {
            let head: Vec<&str> = items[..items.len() - 1]
                .iter()
                .map(|item| item.as_ref())
                .collect();
            format!(
                "{}{}{} {}",
                head.join(delimiter),
                delimiter,
                conjunction,
                items[items.len() - 1].as_ref()
            )
        }
    }
}

pub fn yes(answer: &str) -> bool {
    answer.starts_with('y')
}

pub fn clear_screen() {
    print!("\x1B[2J\x1B[1;1H");
    let _ = io::stdout().flush();
}
