//! Avatar image picked from the local file system.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// An image file selected for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct AvatarFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl AvatarFile {
    /// Wrap file contents, inferring the content type from the file name.
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let content_type = content_type_for(&name).to_string();
        Self {
            name,
            content_type,
            bytes,
        }
    }

    /// `data:` URL for previewing the image before it is uploaded.
    pub fn data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.content_type,
            STANDARD.encode(&self.bytes)
        )
    }

    pub fn extension(&self) -> &str {
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty())
            .unwrap_or("png")
    }

    /// Object path inside the avatars bucket, scoped to the owning user.
    pub fn storage_path(&self, user_id: &str) -> String {
        format!(
            "{user_id}/avatar-{}.{}",
            uuid::Uuid::new_v4().simple(),
            self.extension().to_ascii_lowercase()
        )
    }
}

fn content_type_for(name: &str) -> &'static str {
    let ext = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "avif" => "image/avif",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_from_name() {
        assert_eq!(AvatarFile::new("me.PNG", vec![]).content_type, "image/png");
        assert_eq!(AvatarFile::new("me.jpeg", vec![]).content_type, "image/jpeg");
        assert_eq!(
            AvatarFile::new("README", vec![]).content_type,
            "application/octet-stream"
        );
    }

    #[test]
    fn test_data_url() {
        let file = AvatarFile::new("dot.gif", b"GIF89a".to_vec());
        assert_eq!(file.data_url(), "data:image/gif;base64,R0lGODlh");
    }

    #[test]
    fn test_storage_path_scoped_to_user() {
        let file = AvatarFile::new("Shield.JPG", vec![1, 2, 3]);
        let path = file.storage_path("user-1");
        assert!(path.starts_with("user-1/avatar-"));
        assert!(path.ends_with(".jpg"));
    }
}
