use clap::{Parser, Subcommand};
use reqwest::header::USER_AGENT;
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "linguapi-cli")]
#[command(about = "Client for the LinguAPI challenge", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the bronze task overview
    Tasks,
    /// Step 1: introduce yourself
    Hello { name: String },
    /// Step 2a: ask for the path clue
    Discover,
    /// Step 2b: fetch a document by id
    Document { id: String },
    /// Step 3: send a phrase
    Echo { phrase: String },
    /// Step 4: identify as LinguAPI-Client/<name>
    Client { name: String },
    /// Step 5: submit flags in order
    Final { flags: Vec<String> },
    /// Run all five steps and submit the collected flags
    Walkthrough {
        #[arg(default_value = "learner_1")]
        name: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    match cli.command {
        Commands::Tasks => {
            let res = client.get(format!("{}/bronze/tasks", base)).send().await?;
            print_response(res).await?;
        }
        Commands::Hello { name } => {
            let res = client
                .get(format!("{}/bronze/hello", base))
                .query(&[("name", name)])
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Discover => {
            let res = client.get(format!("{}/bronze/discover", base)).send().await?;
            print_response(res).await?;
        }
        Commands::Document { id } => {
            let res = client
                .get(format!("{}/bronze/documents/{}", base, id))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Echo { phrase } => {
            let res = client
                .post(format!("{}/bronze/echo", base))
                .json(&json!({ "phrase": phrase }))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Client { name } => {
            let res = client
                .get(format!("{}/bronze/client", base))
                .header(USER_AGENT, format!("LinguAPI-Client/{}", name))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Final { flags } => {
            let res = client
                .post(format!("{}/bronze/final", base))
                .json(&json!({ "flags": flags }))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Walkthrough { name } => walkthrough(&client, base, &name).await?,
    }

    Ok(())
}

async fn walkthrough(
    client: &reqwest::Client,
    base: &str,
    name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let steps = [
        client
            .get(format!("{}/bronze/hello", base))
            .query(&[("name", name)]),
        client.get(format!("{}/bronze/documents/42", base)),
        client
            .post(format!("{}/bronze/echo", base))
            .json(&json!({ "phrase": "hello from the walkthrough" })),
        client
            .get(format!("{}/bronze/client", base))
            .header(USER_AGENT, format!("LinguAPI-Client/{}", name)),
    ];

    let mut flags = Vec::with_capacity(steps.len());
    for step in steps {
        let res = step.send().await?;
        let status = res.status();
        let body: Value = res.json().await?;
        let flag = body.get("flag").and_then(Value::as_str).map(str::to_owned);
        match flag {
            Some(flag) if status.is_success() => {
                println!("{} -> {}", status, flag);
                flags.push(flag);
            }
            _ => {
                eprintln!("Error: step failed with status {}", status);
                eprintln!("Response: {}", body);
                return Ok(());
            }
        }
    }

    let res = client
        .post(format!("{}/bronze/final", base))
        .json(&json!({ "flags": flags }))
        .send()
        .await?;
    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: server returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
