//! Single-image lightbox state for the certificate thumbnails. At most one
//! image is enlarged at a time: opening while already open replaces the
//! image, it never stacks.

/// A certificate scan that can be enlarged.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CertificateImage {
    pub src: &'static str,
    pub alt: &'static str,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Lightbox {
    #[default]
    Closed,
    Open(&'static CertificateImage),
}

impl Lightbox {
    /// Enlarge `image`, replacing whatever was open before.
    pub fn open(self, image: &'static CertificateImage) -> Self {
        Lightbox::Open(image)
    }

    /// Close from any state; closing an already-closed lightbox is a no-op.
    pub fn close(self) -> Self {
        Lightbox::Closed
    }

    pub fn image(self) -> Option<&'static CertificateImage> {
        match self {
            Lightbox::Closed => None,
            Lightbox::Open(image) => Some(image),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CERT_A: CertificateImage = CertificateImage {
        src: "/assets/certificates/a.webp",
        alt: "Certificate A",
    };
    const CERT_B: CertificateImage = CertificateImage {
        src: "/assets/certificates/b.webp",
        alt: "Certificate B",
    };

    #[test]
    fn starts_closed() {
        assert_eq!(Lightbox::default(), Lightbox::Closed);
        assert_eq!(Lightbox::default().image(), None);
    }

    #[test]
    fn opening_a_second_image_replaces_not_stacks() {
        let state = Lightbox::default().open(&CERT_A).open(&CERT_B);
        assert_eq!(state.image(), Some(&CERT_B));
    }

    #[test]
    fn close_reaches_closed_from_any_state() {
        assert_eq!(Lightbox::default().open(&CERT_A).close(), Lightbox::Closed);
        // Closing an already-closed lightbox is a no-op.
        assert_eq!(Lightbox::Closed.close(), Lightbox::Closed);
    }

    #[test]
    fn reopening_after_close_shows_the_new_image() {
        let state = Lightbox::default().open(&CERT_A).close().open(&CERT_B);
        assert_eq!(state.image(), Some(&CERT_B));
    }
}
