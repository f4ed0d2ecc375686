use std::io::{self, Write};

use anyhow::Result;
use log::{error, info};

pub mod account;
pub mod ai;
pub mod analytics;
pub mod app;
pub mod config;
pub mod quiz;
pub mod retry;
pub mod storage;

pub use account::{AuthManager, RegisterRequest};
pub use ai::GeminiClient;
pub use analytics::Analytics;
pub use app::{Advance, AppPhase, QuizApp, QuizResults};
pub use config::Settings;
pub use quiz::{
    build_chart_data, build_profile_text, build_session, compute_scores, resolve_archetype,
    PersonalityDimensions, Question, UserAnswer,
};
pub use storage::{FileStore, KeyValueStore, MemoryStore};

use account::subscription;
use quiz::types::{AnswerValue, QuestionKind};

/// Wires the settings, store, account layer and quiz state machine into a
/// minimal line-oriented front end: one full quiz pass, results, and (when
/// an API key is configured) the AI career analysis.
pub async fn run() -> Result<()> {
    let settings = Settings::load();

    let store_path = settings
        .data_dir
        .as_ref()
        .map(|dir| dir.join("store.json"))
        .unwrap_or_else(FileStore::default_path);
    info!("Using store at {}", store_path.display());

    let mut app = QuizApp::new(FileStore::open(store_path));
    let mut auth = AuthManager::new(app.store_mut());
    let analytics = Analytics::new(settings.ga_measurement_id().as_deref());

    if app.phase() == AppPhase::Quiz {
        println!("Resuming your saved quiz...\n");
    } else {
        account_menu(&mut app, &mut auth, &analytics)?;

        let decision = subscription::can_take_test(auth.current_user());
        if !decision.allowed {
            println!("{}", decision.reason.unwrap_or_default());
            return Ok(());
        }

        app.start_quiz(&mut rand::thread_rng());
        analytics.track_quiz_started();
    }

    while app.phase() == AppPhase::Quiz {
        let Some(question) = app.current_question().cloned() else {
            break;
        };
        let total = app.questions().len();
        println!(
            "\nQuestion {} of {} ({:.0}% complete)",
            app.question_index() + 1,
            total,
            app.progress()
        );

        let value = ask_answer(&question)?;
        app.record_answer(UserAnswer { question_id: question.id, value });
        analytics.track_question_answered(app.question_index() + 1, total);

        match app.next_question() {
            Some(Advance::Moved { pillar_completed }) => {
                if let Some(message) = pillar_completed {
                    println!("\n*** {} ***", message);
                }
            }
            Some(Advance::Finished) | None => break,
        }
    }

    let Some(results) = app.results().cloned() else {
        return Ok(());
    };

    println!("\n=== Your Results ===\n");
    println!("{}\n", results.profile_text);
    println!("Trait profile:");
    for (label, value) in results.chart_data.labels.iter().zip(results.chart_data.values) {
        println!("  {:<12} {:>5.1} / 100", label, value);
    }

    analytics.track_quiz_completed(results.archetype.name);
    auth.increment_test_count(app.store_mut());

    match settings.gemini_api_key().map(GeminiClient::new) {
        Some(client) => {
            println!("\nAnalyzing your profile and matching careers...");
            match client.get_analysis_and_suggestions(&results.profile_text).await {
                Ok(analysis) => {
                    let visible =
                        subscription::limit_career_suggestions(&analysis.suggestions, auth.current_user());
                    println!("\nSuggested careers for {}:", analysis.archetype.name);
                    for suggestion in visible {
                        println!("\n- {}", suggestion.career);
                        println!("  {}", suggestion.reasoning);
                    }
                    if visible.len() < analysis.suggestions.len() {
                        println!(
                            "\n{} more suggestion(s) available with Premium.",
                            analysis.suggestions.len() - visible.len()
                        );
                    }
                    auth.save_result(app.store_mut(), &analysis);
                }
                Err(e) => {
                    error!("Analysis request failed: {}", e);
                    println!("Career analysis is unavailable right now. Your results above are saved.");
                }
            }
        }
        None => {
            println!("\nSet GEMINI_API_KEY to receive AI career suggestions.");
        }
    }

    Ok(())
}

fn account_menu(
    app: &mut QuizApp<FileStore>,
    auth: &mut AuthManager,
    analytics: &Analytics,
) -> Result<()> {
    if let Some(user) = auth.current_user() {
        println!("Welcome back, {}!", user.name);
        return Ok(());
    }

    let choice = prompt_line("[L]og in, [R]egister, or press Enter to continue as guest: ")?;
    match choice.trim().to_lowercase().as_str() {
        "l" => {
            let email = prompt_line("Email: ")?;
            let password = prompt_line("Password: ")?;
            let outcome = auth.login(app.store_mut(), email.trim(), password.trim());
            println!("{}", outcome.message);
        }
        "r" => {
            let name = prompt_line("Name: ")?;
            let email = prompt_line("Email: ")?;
            let password = prompt_line("Password (6+ characters): ")?;
            let outcome = auth.register(
                app.store_mut(),
                RegisterRequest {
                    name: name.trim().to_string(),
                    email: email.trim().to_string(),
                    password: password.trim().to_string(),
                },
            );
            println!("{}", outcome.message);
            if outcome.success {
                analytics.track_signup("email");
            }
        }
        _ => {}
    }
    Ok(())
}

fn ask_answer(question: &Question) -> Result<AnswerValue> {
    println!("{}", question.text);
    match &question.kind {
        QuestionKind::MultipleChoice { options }
        | QuestionKind::ImageChoice { options }
        | QuestionKind::Ranking { options }
        | QuestionKind::Rating { options } => {
            for (index, option) in options.iter().enumerate() {
                println!("  {}. {}", index + 1, option.text);
            }
            loop {
                let input = prompt_line("Choose an option: ")?;
                if let Ok(choice) = input.trim().parse::<usize>() {
                    if (1..=options.len()).contains(&choice) {
                        return Ok(AnswerValue::Text(options[choice - 1].text.clone()));
                    }
                }
                println!("Please enter a number between 1 and {}.", options.len());
            }
        }
        QuestionKind::Slider { labels } => {
            println!("  0 = {}, 100 = {}", labels[0], labels[1]);
            loop {
                let input = prompt_line("Your position (0-100): ")?;
                if let Ok(value) = input.trim().parse::<f64>() {
                    if (0.0..=100.0).contains(&value) {
                        return Ok(AnswerValue::Number(value));
                    }
                }
                println!("Please enter a number between 0 and 100.");
            }
        }
        QuestionKind::TextInput => loop {
            let input = prompt_line("Your answer: ")?;
            let trimmed = input.trim();
            if !trimmed.is_empty() {
                return Ok(AnswerValue::Text(trimmed.to_string()));
            }
            println!("Please enter a short answer.");
        },
    }
}

fn prompt_line(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        anyhow::bail!("input stream closed");
    }
    Ok(line.trim_end().to_string())
}
