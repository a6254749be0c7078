mod certificates;
mod contact;
mod introduction;
mod projects;
mod resume;

pub use certificates::CertificatesPage;
pub use contact::ContactPage;
pub use introduction::IntroductionPage;
pub use projects::ProjectsPage;
pub use resume::ResumePage;
