//! Account flows: login, logout, register.

use anyhow::{Context, Result};
use console::Term;
use gameaware_common::account::{validate_registration, FieldErrors};
use gameaware_common::config::ClientConfig;
use gameaware_common::protocol::{LoginRequest, RegisterRequest};
use tracing::info;

use crate::client::{ApiError, BackendClient};
use crate::output;

pub async fn login(config: &ClientConfig) -> Result<()> {
    let term = Term::stdout();
    let username_or_email = prompt(&term, "Username or email: ")?;
    if username_or_email.is_empty() {
        output::warning("Username or email is required.");
        return Ok(());
    }
    term.write_str("Password: ").context("terminal write failed")?;
    let password = term.read_secure_line().context("terminal read failed")?;

    let client = BackendClient::new(config)?;
    match client
        .login(&LoginRequest {
            username_or_email,
            password,
        })
        .await
    {
        Ok(response) => {
            let store = super::store();
            store
                .set_current_user(&response.username)
                .context("failed to store identity")?;
            info!(user = %response.username, "logged in");
            println!("Logged in as {}. Results are now filed under your account.", response.username);
            Ok(())
        }
        Err(e) => {
            output::notice(&e.to_string());
            Ok(())
        }
    }
}

pub fn logout() -> Result<()> {
    let store = super::store();
    store
        .clear_current_user()
        .context("failed to clear identity")?;
    println!("Logged out. New results will be recorded under the guest scope.");
    Ok(())
}

pub async fn register(config: &ClientConfig) -> Result<()> {
    let term = Term::stdout();
    let form = RegisterRequest {
        full_name: prompt(&term, "Full name: ")?,
        email: prompt(&term, "Email: ")?,
        username: prompt(&term, "Username: ")?,
        password: {
            term.write_str("Password: ").context("terminal write failed")?;
            term.read_secure_line().context("terminal read failed")?
        },
        confirm_password: {
            term.write_str("Confirm password: ")
                .context("terminal write failed")?;
            term.read_secure_line().context("terminal read failed")?
        },
    };

    // Local validation first; bad forms never reach the backend.
    if let Err(errors) = validate_registration(&form) {
        print_field_errors(&errors);
        return Ok(());
    }

    let client = BackendClient::new(config)?;
    match client.register(&form).await {
        Ok(response) => {
            let message = response
                .message
                .unwrap_or_else(|| "Registration successful!".to_string());
            println!("{}", message);
            println!("Log in with 'gameawarectl login'.");
            Ok(())
        }
        Err(ApiError::Rejected(errors)) => {
            print_field_errors(&errors);
            Ok(())
        }
        Err(e) => {
            output::notice(&e.to_string());
            Ok(())
        }
    }
}

fn prompt(term: &Term, label: &str) -> Result<String> {
    term.write_str(label).context("terminal write failed")?;
    Ok(term
        .read_line()
        .context("terminal read failed")?
        .trim()
        .to_string())
}

fn print_field_errors(errors: &FieldErrors) {
    for (field, message) in errors.iter() {
        output::warning(&format!("{field}: {message}"));
    }
}
