use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Project error: {0}")]
    Project(String),

    #[error("Solve error: {0}")]
    Solve(String),

    #[error("Correlation error: {0}")]
    Component(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Output error: {0}")]
    Output(String),
}

pub type CliResult<T> = Result<T, CliError>;

impl From<vf_project::ProjectError> for CliError {
    fn from(err: vf_project::ProjectError) -> Self {
        CliError::Project(err.to_string())
    }
}

impl From<vf_solver::SolveError> for CliError {
    fn from(err: vf_solver::SolveError) -> Self {
        CliError::Solve(err.to_string())
    }
}

impl From<vf_components::ComponentError> for CliError {
    fn from(err: vf_components::ComponentError) -> Self {
        CliError::Component(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Output(err.to_string())
    }
}
