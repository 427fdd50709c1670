use crate::Context;
use crate::api::{BadgeApi, PunchSource, normalize_url};
use crate::config::work_days::{format_work_days, parse_work_days};
use crate::config::Config;
use crate::credentials::{PASSWORD_ENV_VARS, prompt_password, store_password};
use crate::errors::AppResult;
use crate::ui::messages;
use std::io::{self, BufRead, Write};

/// Print `label [default]: ` and read one line; empty answer keeps the default.
fn ask(label: &str, default: &str) -> AppResult<String> {
    print!("{} [{}]: ", label, default);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let answer = line.trim();
    Ok(if answer.is_empty() {
        default.to_string()
    } else {
        answer.to_string()
    })
}

/// Handle the `setup` command
///
/// Asks for the API URL, username, weekly hours, workdays and password,
/// checks that the badge API answers, then writes the configuration and
/// saves the password in the OS keychain.
pub fn handle(ctx: &Context) -> AppResult<()> {
    messages::header("— quelio setup —\n");

    let existing = Config::load(&ctx.config_path)?;
    let base = existing.unwrap_or_default();

    let api_url = normalize_url(&ask("API URL", &base.api_url)?);
    let username = ask("Username", &base.username)?;

    let weekly_in = ask("Hours per week", &base.weekly_hours.to_string())?;
    let weekly_hours = weekly_in.parse::<u32>().unwrap_or_else(|_| {
        messages::warning(format!(
            "'{}' is not a number of hours, keeping {}",
            weekly_in, base.weekly_hours
        ));
        base.weekly_hours
    });

    println!("\nWorkdays (1=Mon, 2=Tue, 3=Wed, 4=Thu, 5=Fri, 6=Sat, 7=Sun)");
    println!("Accepted: '1-5' (Mon-Fri), '1,2,3,4,5' or 0-based '0,1,2,3,4'");
    let work_days = parse_work_days(&ask("Workdays", &format_work_days(&base.work_days))?);

    let password = prompt_password()?;

    print!("Testing connection… ");
    io::stdout().flush()?;
    let api = BadgeApi::new(&api_url, &username, &password)?;
    let data = match api.fetch() {
        Ok(d) => d,
        Err(e) => {
            println!("❌");
            return Err(e);
        }
    };
    println!("✅");
    if data.hours.is_empty() {
        messages::warning("Connected, but the API returned no punches yet.");
    }

    let cfg = Config {
        api_url,
        username,
        weekly_hours,
        work_days,
        ..base
    };
    cfg.save(&ctx.config_path)?;

    messages::success(format!("Configuration saved to {}", ctx.config_path.display()));

    match store_password(&cfg, &password) {
        Ok(()) => messages::success("Password saved in the system keychain."),
        Err(e) => {
            messages::warning(format!("Could not save the password in the keychain: {}", e));
            messages::info(format!(
                "Export {} or type the password when asked.",
                PASSWORD_ENV_VARS[0]
            ));
        }
    }
    Ok(())
}
