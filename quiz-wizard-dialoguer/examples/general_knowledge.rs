//! General knowledge quiz. Run with: cargo run -p quiz-wizard-dialoguer --example general_knowledge
//!
//! Set `RUST_LOG=debug` to see every state transition.

use example_quizzes::general_knowledge;
use quiz_controller::QuizController;
use quiz_wizard_dialoguer::DialoguerFrontend;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let questions = general_knowledge()?;
    let mut frontend = DialoguerFrontend::new();
    if let Some(title) = &questions.title {
        frontend = frontend.with_title(title.clone());
    }
    if let Some(intro) = &questions.intro {
        frontend = frontend.with_intro(intro.clone());
    }

    let mut quiz = QuizController::new(questions);
    match quiz.run(frontend) {
        Ok(results) => {
            println!("Final score: {} of {}", results.score, results.total_questions);
            Ok(())
        }
        Err(err) if err.is_cancelled() => {
            println!("Quiz cancelled.");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
