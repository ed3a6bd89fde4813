//! Dialoguer frontend implementation for the QuizFrontend trait.

use console::{Color, style};
use dialoguer::{
    Confirm, Input, MultiSelect, Select,
    theme::{ColorfulTheme, SimpleTheme, Theme},
};
use quiz_controller::{
    AnswerValue, Grade, Question, QuestionKind, QuizError, QuizFrontend, QuizResults, QuizSession,
    Unchanged,
};
use thiserror::Error;
use tracing::debug;

/// Error type for the Dialoguer frontend.
#[derive(Debug, Error)]
pub enum DialoguerFrontendError {
    /// User cancelled the quiz (e.g., pressed Ctrl+C).
    #[error("Quiz cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    /// A command offered by the menu had no effect.
    #[error("Quiz state unchanged: {0}")]
    Unchanged(#[from] Unchanged),
}

impl From<DialoguerFrontendError> for QuizError {
    fn from(err: DialoguerFrontendError) -> Self {
        match err {
            DialoguerFrontendError::Cancelled => QuizError::Cancelled,
            other => QuizError::frontend(other),
        }
    }
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C / Escape)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

fn prompt<T>(result: Result<T, dialoguer::Error>) -> Result<T, DialoguerFrontendError> {
    result.map_err(|e| {
        if is_cancelled(&e) {
            DialoguerFrontendError::Cancelled
        } else {
            DialoguerFrontendError::Dialoguer(e)
        }
    })
}

/// An entry of the navigation menu shown after each answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Next,
    Finish,
    Previous,
    ChangeAnswer,
}

impl Navigation {
    /// The menu entries for a step. Next and Finish are only offered when the
    /// current question can be passed.
    pub fn choices(is_first: bool, is_last: bool, can_advance: bool) -> Vec<Self> {
        let mut choices = Vec::with_capacity(3);
        if can_advance {
            choices.push(if is_last { Self::Finish } else { Self::Next });
        }
        choices.push(Self::ChangeAnswer);
        if !is_first {
            choices.push(Self::Previous);
        }
        choices
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Next => "Next",
            Self::Finish => "Finish",
            Self::Previous => "Previous",
            Self::ChangeAnswer => "Change answer",
        }
    }

    /// A note printed when the entry is chosen.
    pub fn hint(self) -> Option<&'static str> {
        match self {
            Self::ChangeAnswer => {
                Some("Your new answer replaces the previous one and is checked again.")
            }
            _ => None,
        }
    }
}

/// Dialoguer frontend for interactive CLI quizzes.
///
/// Questions are shown step by step; single-choice questions use a select
/// list, multiple-choice questions a multi-select and text questions an input
/// line.
#[derive(Debug, Clone)]
pub struct DialoguerFrontend {
    /// Use colorful theme for prompts.
    colorful: bool,

    /// Say right away whether an answer is correct.
    feedback: bool,

    /// Show the explanation with feedback and results.
    explanations: bool,

    /// Heading printed before the first question.
    title: Option<String>,

    /// Message printed below the heading.
    intro: Option<String>,
}

impl Default for DialoguerFrontend {
    fn default() -> Self {
        Self::new()
    }
}

impl DialoguerFrontend {
    /// Create a new Dialoguer frontend with default (colorful) theme.
    pub fn new() -> Self {
        Self {
            colorful: true,
            feedback: true,
            explanations: true,
            title: None,
            intro: None,
        }
    }

    /// Create a frontend with plain (no color) theme.
    pub fn plain() -> Self {
        Self {
            colorful: false,
            ..Self::new()
        }
    }

    /// Turn immediate correct/incorrect feedback on or off.
    pub fn with_feedback(mut self, feedback: bool) -> Self {
        self.feedback = feedback;
        self
    }

    /// Turn explanations on or off.
    pub fn with_explanations(mut self, explanations: bool) -> Self {
        self.explanations = explanations;
        self
    }

    /// Set a heading printed before the first question.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set a message printed before the first question.
    pub fn with_intro(mut self, intro: impl Into<String>) -> Self {
        self.intro = Some(intro.into());
        self
    }

    fn theme(&self) -> Box<dyn Theme> {
        if self.colorful {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        }
    }

    /// Ask for an answer to `question`, pre-filled with `current`.
    fn ask_answer(
        &self,
        question: &Question,
        current: Option<&AnswerValue>,
    ) -> Result<AnswerValue, DialoguerFrontendError> {
        match question.kind() {
            QuestionKind::Single(_) => self.ask_single(question, current),
            QuestionKind::Multiple(_) => self.ask_multiple(question, current),
            QuestionKind::Text(_) => self.ask_text(question, current),
        }
    }

    fn ask_single(
        &self,
        question: &Question,
        current: Option<&AnswerValue>,
    ) -> Result<AnswerValue, DialoguerFrontendError> {
        let options = question.options();
        let items: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();

        let default = current
            .and_then(AnswerValue::as_str)
            .and_then(|value| options.iter().position(|o| o.value == value))
            .unwrap_or(0);

        let theme = self.theme();
        let selection = prompt(
            Select::with_theme(theme.as_ref())
                .with_prompt("Your answer")
                .items(&items)
                .default(default)
                .interact(),
        )?;

        Ok(AnswerValue::String(options[selection].value.clone()))
    }

    fn ask_multiple(
        &self,
        question: &Question,
        current: Option<&AnswerValue>,
    ) -> Result<AnswerValue, DialoguerFrontendError> {
        let options = question.options();
        let items: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();

        let selected = current.and_then(AnswerValue::as_list).unwrap_or_default();
        let defaults: Vec<bool> = options
            .iter()
            .map(|o| selected.iter().any(|value| *value == o.value))
            .collect();

        let theme = self.theme();
        let indices = prompt(
            MultiSelect::with_theme(theme.as_ref())
                .with_prompt("Your answer (space to toggle, enter to confirm)")
                .items(&items)
                .defaults(&defaults)
                .interact(),
        )?;

        Ok(AnswerValue::StringList(
            indices
                .into_iter()
                .map(|idx| options[idx].value.clone())
                .collect(),
        ))
    }

    fn ask_text(
        &self,
        question: &Question,
        current: Option<&AnswerValue>,
    ) -> Result<AnswerValue, DialoguerFrontendError> {
        let prompt_text = match question.placeholder() {
            Some(placeholder) => format!("Your answer ({placeholder})"),
            None => "Your answer".to_string(),
        };

        let theme = self.theme();
        let mut input = Input::<String>::with_theme(theme.as_ref())
            .with_prompt(prompt_text)
            .allow_empty(true);
        if let Some(text) = current.and_then(AnswerValue::as_str) {
            input = input.with_initial_text(text);
        }

        Ok(AnswerValue::String(prompt(input.interact_text())?))
    }

    fn ask_navigation(&self, choices: &[Navigation]) -> Result<Navigation, DialoguerFrontendError> {
        let items: Vec<&str> = choices.iter().map(|c| c.label()).collect();

        let theme = self.theme();
        let selection = prompt(
            Select::with_theme(theme.as_ref())
                .with_prompt("What next?")
                .items(&items)
                .default(0)
                .interact(),
        )?;

        Ok(choices[selection])
    }

    fn confirm(&self, message: &str) -> Result<bool, DialoguerFrontendError> {
        let theme = self.theme();
        prompt(
            Confirm::with_theme(theme.as_ref())
                .with_prompt(message)
                .default(true)
                .interact(),
        )
    }

    fn show_question(&self, session: &dyn QuizSession, question: &Question) {
        let state = session.state();
        println!();
        println!(
            "{}",
            progress_line(state.current_step(), state.total_questions())
        );
        println!();
        println!("{}", question.title());
        if let Some(description) = question.description() {
            println!("{description}");
        }
        if question.is_required() {
            println!("* Required");
        }
    }

    fn show_feedback(&self, question: &Question, session: &dyn QuizSession) {
        if !self.feedback {
            return;
        }
        let Some(answer) = session.state().answers().get(question.id()) else {
            return;
        };
        if answer.value.is_empty() {
            return;
        }

        println!("{}", feedback_line(answer.is_correct));
        for line in answer_key(question) {
            println!("{line}");
        }
        if self.explanations
            && let Some(explanation) = question.explanation()
        {
            println!("  {explanation}");
        }
    }

    fn show_results(&self, results: &QuizResults) {
        println!();
        println!("{}", results.verdict());
        let line = score_line(results);
        if self.colorful {
            println!("{}", style(line).fg(grade_color(results.grade())));
        } else {
            println!("{line}");
        }
        if let Some(note) = outdated_note(results) {
            println!("{note}");
        }

        for review in results.reviews() {
            println!();
            println!(
                "{} {}. {}",
                mark(review.is_correct),
                review.step,
                review.title
            );
            println!("  Your answer: {}", review.answer_display());
            if !review.is_correct {
                println!("  Correct answer: {}", review.correct_answer);
            }
            if self.explanations
                && let Some(explanation) = &review.explanation
            {
                println!("  {explanation}");
            }
        }
        println!();
    }

    /// One step of the wizard: show the question, ask for an answer if there
    /// is none yet, then let the user navigate.
    fn run_step(
        &self,
        session: &mut dyn QuizSession,
        question: &Question,
    ) -> Result<(), DialoguerFrontendError> {
        self.show_question(session, question);

        let has_answer = session.state().answers().contains(question.id());
        if !has_answer {
            self.answer(session, question)?;
        } else {
            self.show_feedback(question, session);
        }

        loop {
            let choices = Navigation::choices(
                session.is_first_step(),
                session.is_last_step(),
                session.can_advance(),
            );
            let choice = self.ask_navigation(&choices)?;
            debug!(step = session.state().current_step(), ?choice, "navigation");

            match choice {
                Navigation::Next => return Ok(session.advance_step()?),
                Navigation::Previous => return Ok(session.retreat_step()?),
                Navigation::Finish => {
                    session.complete_quiz();
                    return Ok(());
                }
                Navigation::ChangeAnswer => {
                    if let Some(hint) = choice.hint() {
                        println!("{hint}");
                    }
                    self.answer(session, question)?;
                }
            }
        }
    }

    fn answer(
        &self,
        session: &mut dyn QuizSession,
        question: &Question,
    ) -> Result<(), DialoguerFrontendError> {
        let current = session
            .state()
            .answers()
            .get(question.id())
            .map(|a| a.value.clone());
        let value = self.ask_answer(question, current.as_ref())?;
        session.submit_answer(question.id(), value)?;
        self.show_feedback(question, session);
        Ok(())
    }
}

impl QuizFrontend for DialoguerFrontend {
    type Error = DialoguerFrontendError;

    fn run(&self, session: &mut dyn QuizSession) -> Result<(), Self::Error> {
        if let Some(title) = &self.title {
            println!("{title}");
        }
        if let Some(intro) = &self.intro {
            println!("{intro}");
        }

        loop {
            if session.state().is_completed() {
                let results = QuizResults::from_state(session.source(), session.state());
                self.show_results(&results);
                if self.confirm("Start again?")? {
                    session.reset_quiz();
                    continue;
                }
                return Ok(());
            }

            let Some(question) = session.current_question().cloned() else {
                println!("Question not found.");
                if self.confirm("Restart the quiz?")? {
                    session.reset_quiz();
                    continue;
                }
                return Ok(());
            };

            self.run_step(session, &question)?;
        }
    }
}

/// "Question 2 of 5" followed by one dot per step.
fn progress_line(current: usize, total: usize) -> String {
    let dots: String = (1..=total)
        .map(|step| match step.cmp(&current) {
            std::cmp::Ordering::Less => '●',
            std::cmp::Ordering::Equal => '◉',
            std::cmp::Ordering::Greater => '○',
        })
        .collect();
    format!("Question {current} of {total}  {dots}")
}

/// Every option with the correct ones ticked, or the expected text.
fn answer_key(question: &Question) -> Vec<String> {
    match question.kind() {
        QuestionKind::Text(_) => vec![format!("Correct answer: {}", question.correct_answer())],
        QuestionKind::Single(_) | QuestionKind::Multiple(_) => question
            .options()
            .iter()
            .map(|option| {
                let marker = if question.is_correct_option(&option.value) {
                    '✔'
                } else {
                    ' '
                };
                format!("  {marker} {}", option.label)
            })
            .collect(),
    }
}

fn score_line(results: &QuizResults) -> String {
    format!(
        "{}% - {} of {} questions correct",
        results.percentage(),
        results.score,
        results.total_questions
    )
}

fn grade_color(grade: Grade) -> Color {
    match grade {
        Grade::High => Color::Green,
        Grade::Medium => Color::Yellow,
        Grade::Low => Color::Red,
    }
}

fn outdated_note(results: &QuizResults) -> Option<String> {
    results.score_is_outdated().then(|| {
        format!(
            "Answers changed after finishing: the score counts the answers given then, \
             {} of the answers below are now correct. Finish again to re-score.",
            results.reviewed_correct()
        )
    })
}

fn feedback_line(is_correct: bool) -> &'static str {
    if is_correct { "✔ Correct!" } else { "✘ Incorrect" }
}

fn mark(is_correct: bool) -> char {
    if is_correct { '✔' } else { '✘' }
}
