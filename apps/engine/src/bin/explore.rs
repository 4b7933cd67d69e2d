//! Terminal walkthrough of the matching engine: a stand-in presentation
//! layer that feeds user events into the core and renders its outputs.
//!
//! Type to search, `:pick N` to select a suggestion, `:quiz` to answer the
//! questions, `:reset` to restart the quiz, `:quit` to leave.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use compass_engine::catalog::Catalog;
use compass_engine::config::MatchTuning;
use compass_engine::coordinator::MatchState;
use compass_engine::matching::suggestions;
use compass_engine::quiz::QuizProgress;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("compass_engine=info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let catalog = Catalog::bundled()?;
    info!("Catalog ready with {} careers", catalog.profiles.len());

    // One reader for the whole session. StdinLock is not reentrant, so every
    // consumer below borrows this handle instead of locking again.
    let stdin = io::stdin();
    run_session(&mut stdin.lock(), &catalog)
}

fn run_session(input: &mut impl BufRead, catalog: &Catalog) -> Result<()> {
    let tuning = MatchTuning::default();
    let mut state = MatchState::new(tuning.clone());
    let mut quiz = QuizProgress::new();

    println!("Career explorer — type to search, :quiz, :reset, :quit");
    render(&state, catalog, &tuning);
    prompt()?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let command = line.trim();

        match command {
            ":quit" => break,
            ":reset" => {
                quiz.reset();
                println!("Quiz restarted.");
            }
            ":quiz" => {
                run_quiz(input, &mut quiz, &mut state, catalog, &tuning)?;
            }
            _ if command.starts_with(":pick ") => {
                pick_suggestion(command, &mut state, catalog, &tuning);
            }
            query => {
                state.on_query_change(query);
            }
        }

        render(&state, catalog, &tuning);
        // Focus request consumed after render, per the ordering contract.
        if let Some(id) = state.take_focus_request() {
            println!("  → scrolled to {id}");
        }
        prompt()?;
    }
    Ok(())
}

fn prompt() -> Result<()> {
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}

fn render(state: &MatchState, catalog: &Catalog, tuning: &MatchTuning) {
    let rows = suggestions::suggestions(catalog, state.query(), tuning);
    if rows.is_empty() {
        println!("No suggestions — try a different search term.");
    } else {
        for (i, profile) in rows.iter().enumerate() {
            println!("  [{}] {} — {}", i + 1, profile.title, profile.skills.join(", "));
        }
    }

    let (shown, total) = state.view_summary(catalog);
    println!("Showing {shown} of {total} careers");
    for profile in state.derive_view(catalog) {
        let marker = if state.highlighted_id() == Some(profile.id.as_str()) {
            "*"
        } else {
            " "
        };
        println!(" {marker} {} ({})", profile.title, profile.salary_range);
    }
}

fn pick_suggestion(input: &str, state: &mut MatchState, catalog: &Catalog, tuning: &MatchTuning) {
    let rows = suggestions::suggestions(catalog, state.query(), tuning);
    let choice = input
        .trim_start_matches(":pick ")
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| rows.get(i).copied());

    match choice {
        Some(profile) => {
            // Pick-to-fill: the title lands in the query before the
            // selection is applied.
            let (id, title) = (profile.id.clone(), profile.title.clone());
            state.on_query_change(&title);
            state.on_search_select(&id);
        }
        None => println!("No such suggestion."),
    }
}

fn run_quiz(
    input: &mut impl BufRead,
    quiz: &mut QuizProgress,
    state: &mut MatchState,
    catalog: &Catalog,
    tuning: &MatchTuning,
) -> Result<()> {
    let mut answer = String::new();
    while !quiz.showing_results() {
        let Some(question) = quiz.current_question(catalog) else {
            break;
        };
        println!(
            "\n[{}%] {}",
            quiz.progress_percent(catalog),
            question.prompt
        );
        if let Some(helper) = &question.helper {
            println!("  ({helper})");
        }
        for (i, option) in question.options.iter().enumerate() {
            let emoji = option.emoji.as_deref().unwrap_or("•");
            println!("  [{}] {emoji} {} — {}", i + 1, option.label, option.description);
        }
        prompt()?;

        answer.clear();
        if input.read_line(&mut answer)? == 0 {
            // Input ended mid-quiz: leave without applying a completion.
            return Ok(());
        }
        let picked = answer
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| question.options.get(i));

        match picked {
            Some(option) => {
                let (qid, oid) = (question.id.clone(), option.id.clone());
                quiz.select_option(&qid, &oid);
                quiz.advance(catalog);
            }
            None => println!("Pick an option by number."),
        }
    }

    let shortlist = quiz.recommendations(catalog, tuning);
    if shortlist.is_empty() {
        println!("\nNo careers overlap your answers — explore by search instead.");
    } else {
        println!("\nYour matches:");
        for rec in &shortlist {
            println!("  {} (score {})", rec.profile.title, rec.score);
        }
    }
    state.on_quiz_complete(shortlist.iter().map(|r| r.profile.id.clone()).collect());
    Ok(())
}
