//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod admission_repo;
pub mod alumni_repo;
pub mod banner_repo;
pub mod contact_repo;
pub mod course_repo;
pub mod enquiry_repo;
pub mod exam_repo;
pub mod founder_repo;
pub mod gallery_folder_repo;
pub mod gallery_repo;
pub mod marksheet_repo;
pub mod staff_repo;
pub mod student_repo;
pub mod user_repo;

pub use admission_repo::AdmissionRepo;
pub use alumni_repo::AlumniRepo;
pub use banner_repo::BannerRepo;
pub use contact_repo::ContactRepo;
pub use course_repo::CourseRepo;
pub use enquiry_repo::EnquiryRepo;
pub use exam_repo::ExamRepo;
pub use founder_repo::FounderRepo;
pub use gallery_folder_repo::GalleryFolderRepo;
pub use gallery_repo::GalleryRepo;
pub use marksheet_repo::MarksheetRepo;
pub use staff_repo::StaffRepo;
pub use student_repo::StudentRepo;
pub use user_repo::UserRepo;

/// Build a `%...%` ILIKE pattern with `\`, `%` and `_` escaped, so a
/// keyword only ever matches literally.
pub(crate) fn like_pattern(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len() + 2);
    escaped.push('%');
    for c in keyword.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}
