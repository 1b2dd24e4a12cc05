//! Command-line interface definitions

use clap::{Args, Parser, Subcommand};
use shared::{LoginForm, RegistrationForm, SoilFormInput};

#[derive(Parser, Debug)]
#[command(author, version, about = "FarmHelp soil analysis client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Submit a soil sample for a crop and fertilizer recommendation
    Predict(PredictArgs),

    /// Check login form values
    CheckLogin(LoginArgs),

    /// Check registration form values
    CheckRegister(RegisterArgs),

    /// List the accepted regions
    Regions,
}

/// Soil values are taken as text and parsed like form input
#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Nitrogen (N), 0-140
    #[arg(long, allow_hyphen_values = true)]
    pub nitrogen: String,

    /// Phosphorus (P), 0-140
    #[arg(long, allow_hyphen_values = true)]
    pub phosphorus: String,

    /// Potassium (K), 0-140
    #[arg(long, allow_hyphen_values = true)]
    pub potassium: String,

    /// Temperature in °C, 0-50
    #[arg(long, allow_hyphen_values = true)]
    pub temperature: String,

    /// Relative humidity in %, 0-100
    #[arg(long, allow_hyphen_values = true)]
    pub humidity: String,

    /// Soil pH, 0-14
    #[arg(long, allow_hyphen_values = true)]
    pub ph: String,

    /// Rainfall in mm, 0-300
    #[arg(long, allow_hyphen_values = true)]
    pub rainfall: String,

    /// Region name, see `farmhelp regions`
    #[arg(long)]
    pub region: String,

    /// Print the recommendation as JSON
    #[arg(long)]
    pub json: bool,

    /// Skip N/P/K commentary
    #[arg(long)]
    pub no_enrich: bool,
}

impl PredictArgs {
    pub fn form_input(&self) -> SoilFormInput {
        SoilFormInput {
            nitrogen: self.nitrogen.clone(),
            phosphorus: self.phosphorus.clone(),
            potassium: self.potassium.clone(),
            temperature: self.temperature.clone(),
            humidity: self.humidity.clone(),
            ph: self.ph.clone(),
            rainfall: self.rainfall.clone(),
            region: self.region.clone(),
        }
    }
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub password: Option<String>,
}

impl From<&LoginArgs> for LoginForm {
    fn from(args: &LoginArgs) -> Self {
        LoginForm {
            email: args.email.clone(),
            password: args.password.clone(),
        }
    }
}

#[derive(Args, Debug)]
pub struct RegisterArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub password: Option<String>,

    #[arg(long)]
    pub confirm_password: Option<String>,
}

impl From<&RegisterArgs> for RegistrationForm {
    fn from(args: &RegisterArgs) -> Self {
        RegistrationForm {
            name: args.name.clone(),
            email: args.email.clone(),
            password: args.password.clone(),
            confirm_password: args.confirm_password.clone(),
        }
    }
}
