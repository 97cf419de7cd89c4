use super::StructuredError;
use core::fmt::{self, Display};

impl Display for StructuredError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return Display::fmt(&self.fmt().cascaded(), f);
        }
        match &self.cause {
            Some(cause) => write!(f, "{}: {}", self.message, cause),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for StructuredError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause.as_ref().map(|cause| cause.as_error())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for StructuredError {
    /// Serializes the logging payload: this layer's message, the rendered
    /// chain and the collected pairs folded outer-wins.
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("StructuredError", 3)?;
        state.serialize_field("message", &self.message)?;
        state.serialize_field("error", &self.to_string())?;
        state.serialize_field("kvs", &self.collect_kvs())?;
        state.end()
    }
}
