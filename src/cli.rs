//! Command line structure

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use healthprism::logic::forms::{
    BmiCategory, Gender, HeartRiskForm, NutritionGoal, StressForm, StressTopic,
};

/// HealthPrism - heart risk, stress and wellness assistant
#[derive(Parser)]
#[command(name = "healthprism")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Backend base URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Where history and session are kept
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Predict heart-disease risk and explain the result
    Predict(PredictArgs),

    /// Predict stress level from daily biometrics
    Stress(StressArgs),

    /// Talk to HealthBot (empty line or Ctrl-D to quit)
    Chat,

    /// Generate a meal plan, tailored by your latest risk score
    Nutrition {
        #[arg(long)]
        age: u32,

        /// lower-cholesterol, lose-weight, general-heart-health, build-muscle
        #[arg(long, default_value = "general heart health")]
        goal: NutritionGoal,

        /// Allergies or diet restrictions
        #[arg(long, default_value = "")]
        restrictions: String,
    },

    /// Get a stress management plan
    Coach {
        /// work, family, finances, health, anxiety
        #[arg(long, default_value = "work")]
        topic: StressTopic,
    },

    /// Show past predictions
    History {
        /// Delete the local history
        #[arg(long, conflicts_with = "server")]
        clear: bool,

        /// Show the history saved on the server (requires login)
        #[arg(long)]
        server: bool,
    },

    /// Show the latest prediction
    Dashboard,

    /// Log in and remember the session
    Login { username: String, password: String },

    /// Create an account
    Register { username: String, password: String },

    /// Forget the saved session
    Logout,

    /// Guided 4-4-6 breathing (Ctrl-C to stop)
    Breathe {
        #[arg(long, default_value_t = 4)]
        cycles: u32,
    },
}

/// Heart-risk inputs, kept as text so bad numbers are reported together
#[derive(Args)]
pub struct PredictArgs {
    /// Age (years)
    #[arg(long, default_value = "63")]
    pub age: String,
    /// Resting blood pressure (mm Hg)
    #[arg(long, default_value = "145")]
    pub trestbps: String,
    /// Serum cholesterol (mg/dl)
    #[arg(long, default_value = "233")]
    pub chol: String,
    /// Maximum heart rate achieved
    #[arg(long, default_value = "150")]
    pub thalach: String,
    /// ST depression induced by exercise
    #[arg(long, default_value = "2.3")]
    pub oldpeak: String,
    /// Chest pain type (0-3)
    #[arg(long, default_value = "3")]
    pub cp: String,
    /// Major vessels colored by fluoroscopy (0-4)
    #[arg(long, default_value = "0")]
    pub ca: String,
    /// Thalassemia (0-3)
    #[arg(long, default_value = "1")]
    pub thal: String,

    /// Latitude for the "find a doctor" link on critical results
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    pub lat: Option<f64>,
    /// Longitude for the "find a doctor" link on critical results
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lon: Option<f64>,
}

impl PredictArgs {
    pub fn form(&self) -> HeartRiskForm {
        HeartRiskForm {
            age: self.age.clone(),
            trestbps: self.trestbps.clone(),
            chol: self.chol.clone(),
            thalach: self.thalach.clone(),
            oldpeak: self.oldpeak.clone(),
            cp: self.cp.clone(),
            ca: self.ca.clone(),
            thal: self.thal.clone(),
        }
    }
}

#[derive(Args)]
pub struct StressArgs {
    #[arg(long, default_value_t = 30)]
    pub age: u32,
    #[arg(long, default_value = "male")]
    pub gender: Gender,
    #[arg(long, default_value = "Doctor")]
    pub occupation: String,
    /// Hours of sleep per night
    #[arg(long, default_value_t = 7.0)]
    pub sleep_duration: f64,
    /// Sleep quality, 1-10
    #[arg(long, default_value_t = 8)]
    pub sleep_quality: u8,
    /// Minutes of activity per day
    #[arg(long, default_value_t = 60)]
    pub physical_activity: u32,
    #[arg(long, default_value = "normal")]
    pub bmi_category: BmiCategory,
    /// e.g. 120/80
    #[arg(long, default_value = "120/80")]
    pub blood_pressure: String,
    #[arg(long, default_value_t = 70)]
    pub heart_rate: u32,
    #[arg(long, default_value_t = 8000)]
    pub daily_steps: u32,
}

impl From<StressArgs> for StressForm {
    fn from(args: StressArgs) -> Self {
        Self {
            age: args.age,
            gender: args.gender,
            occupation: args.occupation,
            sleep_duration: args.sleep_duration,
            sleep_quality: args.sleep_quality,
            physical_activity: args.physical_activity,
            bmi_category: args.bmi_category,
            blood_pressure: args.blood_pressure,
            heart_rate: args.heart_rate,
            daily_steps: args.daily_steps,
        }
    }
}
