use std::io::{BufRead, Write};

use hf_diagnosis::ChatAssistant;

use crate::context::AppContext;

const EXIT_WORDS: [&str; 3] = ["/sair", "/exit", "/quit"];

/// Handle `homefix chat`: one conversation per process, read line by line
/// from stdin until EOF or an exit word. `/reset` starts over.
pub async fn handle(ctx: &AppContext) -> anyhow::Result<()> {
    let mut assistant = ChatAssistant::new(ctx.gateway()?, ctx.config.chat.transmission);
    let greeting = assistant
        .history()
        .first()
        .map(|turn| turn.text.clone())
        .unwrap_or_default();
    println!("EletroBot: {greeting}");

    let stdin = std::io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if EXIT_WORDS.contains(&input) {
            break;
        }
        if input == "/reset" {
            assistant.reset();
            println!("EletroBot: {greeting}");
            continue;
        }
        if let Some(reply) = assistant.send(input).await {
            println!("EletroBot: {}", reply.text);
        }
    }
    tracing::debug!(turns = assistant.history().len(), "chat ended");
    Ok(())
}
