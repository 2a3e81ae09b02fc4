use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show the hydrated session and authentication state
    Status,

    /// Store an identity as the current session
    Login {
        /// Backend-assigned user identifier
        #[arg(long)]
        id: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        /// Role label, repeatable
        #[arg(long = "role")]
        roles: Vec<String>,

        /// Bearer token issued by the auth service
        #[arg(long)]
        token: Option<String>,
    },

    /// Clear the session everywhere
    Logout,

    /// Delete the persisted record from every backend (corrupt-record
    /// recovery)
    Purge,
}
