//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use super::SystemArgs;
use crate::api::{self, MeaningResponse, TuneRequest};
use crate::config::AppConfig;
use crate::evaluation_instant;
use chrono::Utc;
use numencoach_core::{
    NameTuner, NumberResult, NumerologyError, Profile, ProfileCache, ProfileSnapshot,
    ResultsBundle, TunerConfig, calculate_all_numbers, calculate_compatibility, coaching_text,
    compute_name_numbers, meanings, normalize_name,
};
use serde::Serialize;
use std::path::PathBuf;

/// Everything a command needs besides its own arguments.
#[derive(Debug, Clone)]
pub struct Context {
    pub config: AppConfig,
    pub cache_path: PathBuf,
    /// Evaluation date, `YYYY-MM-DD`.
    pub at: Option<String>,
    pub json_mode: bool,
    pub verbose: bool,
}

// =============================================================================
// HELPERS
// =============================================================================

fn build_profile(
    ctx: &Context,
    name: &str,
    dob: &str,
    args: &SystemArgs,
) -> Result<Profile, NumerologyError> {
    let profile = Profile::new(
        name,
        dob,
        args.system.unwrap_or(ctx.config.defaults.system),
        args.preserve_masters
            .unwrap_or(ctx.config.defaults.preserve_masters),
    );
    profile.validate()?;
    Ok(profile)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), NumerologyError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| NumerologyError::SerializationError(e.to_string()))?;
    println!("{}", text);
    Ok(())
}

/// Value followed by its reduction trace.
fn describe(result: &NumberResult) -> String {
    let mut text = result.value.to_string();
    if let Some(intermediate) = &result.intermediate {
        let digits: Vec<String> = intermediate.digits.iter().map(u32::to_string).collect();
        text.push_str(&format!(
            "  [{} = {}]",
            digits.join("+"),
            intermediate.sum
        ));
    } else if let Some(raw) = result.raw {
        text.push_str(&format!("  [raw {}]", raw));
    }
    text
}

fn open_cache(ctx: &Context) -> Result<ProfileCache, NumerologyError> {
    tracing::debug!("Opening profile cache at {:?}", ctx.cache_path);
    ProfileCache::open(&ctx.cache_path)
}

// =============================================================================
// CALCULATE COMMAND
// =============================================================================

/// Calculate and print the full profile.
pub fn cmd_calculate(
    ctx: &Context,
    name: &str,
    dob: &str,
    args: &SystemArgs,
    save: bool,
) -> Result<(), NumerologyError> {
    let profile = build_profile(ctx, name, dob, args)?;
    let at = evaluation_instant(ctx.at.as_deref())?;
    let results = calculate_all_numbers(&profile, at)?;
    let coaching = coaching_text(&results);

    if save {
        let cache = open_cache(ctx)?;
        cache.save(&ProfileSnapshot::new(
            profile.clone(),
            results.clone(),
            Utc::now(),
        ))?;
        tracing::info!("Profile saved to {:?}", ctx.cache_path);
    }

    if ctx.json_mode {
        return print_json(&serde_json::json!({
            "profile": profile,
            "results": results,
            "coaching": coaching,
            "saved": save,
        }));
    }

    println!("NumenCoach Profile");
    println!("==================");
    println!("Name:    {}", profile.full_name);
    println!("Born:    {}", profile.dob);
    println!(
        "System:  {} (masters {})",
        profile.system,
        if profile.preserve_masters {
            "preserved"
        } else {
            "reduced"
        }
    );
    println!("As of:   {}", results.calculated_at.format("%Y-%m-%d"));
    println!();
    print_results(&results, ctx.verbose);

    println!();
    println!("Coaching: {}", coaching.title);
    println!("  {}", coaching.summary);
    for action in &coaching.actions {
        println!("  - {}", action);
    }
    println!("  Confidence: {:?}", coaching.confidence);

    if save {
        println!();
        println!("Saved to {:?}", ctx.cache_path);
    }
    Ok(())
}

fn print_results(results: &ResultsBundle, verbose: bool) {
    println!("Core Numbers:");
    println!("  Life Path:    {}", describe(&results.life_path));
    println!("  Expression:   {}", describe(&results.expression));
    println!("  Soul Urge:    {}", describe(&results.soul_urge));
    println!("  Personality:  {}", describe(&results.personality));
    println!("  Birthday:     {}", results.birthday);
    println!("  Maturity:     {}", results.maturity);
    println!();
    println!("Cycles:");
    println!("  Personal Year:  {}", results.personal_year);
    println!("  Personal Month: {}", results.personal_month);
    println!("  Personal Day:   {}", results.personal_day);
    println!();

    println!("Pinnacles:");
    let p = &results.pinnacles;
    for pinnacle in [p.first, p.second, p.third, p.fourth] {
        println!("  {:<12} {}", pinnacle.ages.label(), pinnacle.value);
        if let Some(text) = meanings::pinnacle_meaning(pinnacle.value).filter(|_| verbose) {
            println!("               {}", text);
        }
    }
    println!();

    println!("Challenges:");
    let c = &results.challenges;
    for (label, value) in [
        ("First", c.first),
        ("Second", c.second),
        ("Third", c.third),
        ("Fourth", c.fourth),
    ] {
        println!("  {:<12} {}", label, value);
        if let Some(text) = meanings::challenge_meaning(value).filter(|_| verbose) {
            println!("               {}", text);
        }
    }
    println!();

    println!("Lo-Shu Grid:");
    for row in results.lo_shu.rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|&(digit, count)| {
                if count == 0 {
                    "   .".to_string()
                } else {
                    format!("{:>4}", digit.to_string().repeat(count as usize))
                }
            })
            .collect();
        println!("  {}", cells.join(" |"));
    }
    if results.lo_shu.missing.is_empty() {
        println!("  Missing: none");
    } else {
        let missing: Vec<String> = results.lo_shu.missing.iter().map(u32::to_string).collect();
        println!("  Missing: {}", missing.join(", "));
    }
    println!();

    println!("Name Extras:");
    println!("  Balance:          {}", results.balance_number);
    println!(
        "  Hidden Passion:   {} ({} letters)",
        results.hidden_passion.value, results.hidden_passion.count
    );
    println!("  Subconscious Self: {}", results.subconscious_self);
    println!();

    if results.karmic_debt.is_empty() {
        println!("Karmic Debt: none");
    } else {
        println!("Karmic Debt:");
        for debt in &results.karmic_debt {
            let summary = meanings::karmic_debt_meaning(debt.number)
                .map(|m| m.summary)
                .unwrap_or_default();
            println!("  {:<12} {}  {}", debt.source.label(), debt.number, summary);
        }
    }

    let lp = results.life_path.value;
    if let (Some(day), Some(color)) = (meanings::lucky_day(lp), meanings::lucky_color(lp)) {
        println!();
        println!("Lucky Day:   {}", day);
        println!("Lucky Color: {}", color);
    }
}

// =============================================================================
// TUNE COMMAND
// =============================================================================

/// Suggest spellings with a different Expression.
pub fn cmd_tune(
    ctx: &Context,
    name: &str,
    args: &SystemArgs,
    alphabet: Option<String>,
    max: Option<usize>,
) -> Result<(), NumerologyError> {
    let request = TuneRequest {
        full_name: name.to_string(),
        system: args.system,
        preserve_masters: args.preserve_masters,
        alphabet,
        max_suggestions: max,
    };
    request.validate()?;
    if normalize_name(name).is_empty() {
        return Err(NumerologyError::EmptyName);
    }

    let system = args.system.unwrap_or(ctx.config.defaults.system);
    let preserve = args
        .preserve_masters
        .unwrap_or(ctx.config.defaults.preserve_masters);

    let mut config = TunerConfig::default();
    if let Some(alphabet) = request.alphabet {
        config.alphabet = alphabet;
    }
    if let Some(max) = request.max_suggestions {
        config.max_suggestions = max;
    }

    let baseline = compute_name_numbers(name, system, preserve).expression.value;
    let suggestions = NameTuner::with_config(system, preserve, config).suggest(name);

    if ctx.json_mode {
        return print_json(&serde_json::json!({
            "name": name,
            "system": system,
            "baseline": baseline,
            "suggestions": suggestions,
        }));
    }

    println!("Name Tuner ({})", system);
    println!("==========");
    println!("Name:       {}", name);
    println!("Expression: {}", baseline);
    println!();
    if suggestions.is_empty() {
        println!("No alternative spelling changes the Expression.");
        return Ok(());
    }
    for suggestion in &suggestions {
        println!(
            "  {:<20} {:>2} ({:+})  {}",
            suggestion.name, suggestion.new_expression, suggestion.delta, suggestion.change
        );
    }
    Ok(())
}

// =============================================================================
// COMPATIBILITY COMMAND
// =============================================================================

/// Compare two profiles.
pub fn cmd_compat(
    ctx: &Context,
    first: (&str, &str),
    second: (&str, &str),
    args: &SystemArgs,
) -> Result<(), NumerologyError> {
    let a = build_profile(ctx, first.0, first.1, args)?;
    let b = build_profile(ctx, second.0, second.1, args)?;
    let at = evaluation_instant(ctx.at.as_deref())?;
    let report = calculate_compatibility(&a, &b, at)?;

    if ctx.json_mode {
        return print_json(&report);
    }

    println!("Compatibility");
    println!("=============");
    println!(
        "{}  ({} / {} / {})",
        a.full_name,
        report.results_a.life_path.value,
        report.results_a.expression.value,
        report.results_a.soul_urge.value
    );
    println!(
        "{}  ({} / {} / {})",
        b.full_name,
        report.results_b.life_path.value,
        report.results_b.expression.value,
        report.results_b.soul_urge.value
    );
    println!();
    println!("Score: {}% ({:?}, raw {})", report.percentage, report.band, report.score);
    println!("{}", report.analysis);
    Ok(())
}

// =============================================================================
// MEANING COMMAND
// =============================================================================

/// Print every table entry for one number.
pub fn cmd_meaning(ctx: &Context, number: u32) -> Result<(), NumerologyError> {
    let meaning = MeaningResponse::lookup(number);
    if !meaning.is_found() {
        return Err(NumerologyError::InvalidInput(format!(
            "No meaning recorded for {}",
            number
        )));
    }

    if ctx.json_mode {
        return print_json(&meaning);
    }

    println!("Number {}", number);
    println!("=========");
    if let Some(summary) = &meaning.summary {
        println!("{}", summary);
        println!();
        println!("Strengths:  {}", meaning.strengths.join(", "));
        println!("Weaknesses: {}", meaning.weaknesses.join(", "));
        println!("Coaching:");
        for tip in &meaning.coaching {
            println!("  - {}", tip);
        }
    }
    if let (Some(day), Some(color)) = (&meaning.lucky_day, &meaning.lucky_color) {
        println!("Lucky Day: {}  Lucky Color: {}", day, color);
    }
    if let Some(pinnacle) = &meaning.pinnacle {
        println!("As a pinnacle:  {}", pinnacle);
    }
    if let Some(challenge) = &meaning.challenge {
        println!("As a challenge: {}", challenge);
    }
    if let Some(debt) = &meaning.karmic_debt {
        println!("Karmic debt {}: {}", number, debt.summary);
        println!("  {}", debt.meaning);
        println!("  Lesson: {}", debt.lesson);
    }
    Ok(())
}

// =============================================================================
// CACHE COMMANDS
// =============================================================================

/// Print the cached profile.
pub fn cmd_cache_show(ctx: &Context) -> Result<(), NumerologyError> {
    let cache = open_cache(ctx)?;
    let snapshot = cache.load()?;

    if ctx.json_mode {
        return print_json(&serde_json::json!({
            "cache": ctx.cache_path.to_string_lossy(),
            "snapshot": snapshot,
        }));
    }

    let Some(snapshot) = snapshot else {
        println!("No cached profile in {:?}", ctx.cache_path);
        println!("Run `numencoach calculate --name <NAME> --dob <DD/MM/YYYY> --save` to store one.");
        return Ok(());
    };

    println!("Cached Profile");
    println!("==============");
    println!("Name:    {}", snapshot.profile.full_name);
    println!("Born:    {}", snapshot.profile.dob);
    println!("System:  {}", snapshot.profile.system);
    println!("Saved:   {}", snapshot.saved_at.to_rfc3339());
    println!();
    print_results(&snapshot.results, ctx.verbose);
    Ok(())
}

/// Remove the cached profile.
pub fn cmd_cache_clear(ctx: &Context) -> Result<(), NumerologyError> {
    let cache = open_cache(ctx)?;
    let cleared = cache.clear()?;

    if ctx.json_mode {
        return print_json(&serde_json::json!({ "cleared": cleared }));
    }

    if cleared {
        println!("Cached profile removed.");
    } else {
        println!("No cached profile to remove.");
    }
    Ok(())
}

// =============================================================================
// SERVER COMMAND
// =============================================================================

/// Start the HTTP server.
pub async fn cmd_server(
    ctx: Context,
    host: Option<String>,
    port: Option<u16>,
) -> Result<(), NumerologyError> {
    let mut config = ctx.config;
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    config.cache.path = ctx.cache_path;
    let cache = ProfileCache::open(&config.cache.path)?;

    println!("NumenCoach Server Starting...");
    println!();
    println!("Configuration:");
    println!("  Host:       {}", config.server.host);
    println!("  Port:       {}", config.server.port);
    println!("  System:     {}", config.defaults.system);
    println!("  Masters:    {}", config.defaults.preserve_masters);
    println!("  Cache:      {:?}", config.cache.path);
    println!("  Rate limit: {}/s", config.server.rate_limit);
    println!();
    println!("Endpoints:");
    println!("  GET    /health           - Health check");
    println!("  POST   /calculate        - Full profile");
    println!("  POST   /tune             - Name Tuner");
    println!("  POST   /compatibility    - Compare two profiles");
    println!("  GET    /meaning/{{number}} - Narrative tables");
    println!("  GET    /profile          - Cached profile");
    println!("  DELETE /profile          - Clear cached profile");
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    api::run_server(&config, Some(cache)).await
}

// =============================================================================
// TESTS
// =============================================================================
