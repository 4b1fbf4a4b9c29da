//! Session commands: sign in, sign out, password reset.
//!
//! The session token lands in the configured storage file and rides along
//! on every subsequent authenticated command automatically.

use clap::Subcommand;
use colored::Colorize;
use tracing::instrument;

use kiosko_admin_core::usecases::{LogIn, LogOut, RequestPasswordReset};

use crate::composition::CompositionRoot;
use crate::errors::Error;

/// Session subcommands.
#[derive(Subcommand, Debug)]
pub enum AuthCommands {
    /// Sign in and store the session token
    Login {
        /// Operator email address
        #[arg(long)]
        email: String,
        /// Operator password
        #[arg(long)]
        password: String,
    },

    /// Forget the stored session token
    Logout,

    /// Request a password reset email
    ResetPassword {
        /// Operator email address
        #[arg(long)]
        email: String,
    },
}

/// Executes the specified session command.
#[instrument(skip(root, cmd))]
pub async fn execute(root: &CompositionRoot, cmd: &AuthCommands) -> Result<(), Error> {
    match cmd {
        AuthCommands::Login { email, password } => {
            let usecase = root.resolve(|| LogIn::new(root.session()));
            if usecase.handle(email, password).await? {
                println!("{}", "Signed in.".green());
                Ok(())
            } else {
                Err(Error::Rejected("login"))
            }
        }
        AuthCommands::Logout => {
            let usecase = root.resolve(|| LogOut::new(root.session()));
            usecase.handle()?;
            println!("Signed out.");
            Ok(())
        }
        AuthCommands::ResetPassword { email } => {
            let usecase = root.resolve(|| RequestPasswordReset::new(root.session()));
            if usecase.handle(email).await? {
                println!("{}", "Password reset email requested.".green());
                Ok(())
            } else {
                Err(Error::Rejected("password reset"))
            }
        }
    }
}
