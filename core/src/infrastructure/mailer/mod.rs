pub mod http_mailer;

pub use http_mailer::HttpMailerRepository;
