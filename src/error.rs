use ufmt::{uDebug, uWrite, Formatter};

/// failed i/o channel, wrapping the hal error.
/// noise and unknown codes are not errors, they dispatch as unrecognized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchError<E> {
    Indicator(E),
    Button(E),
}

impl<E> uDebug for SwitchError<E> {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        f.write_str(match self {
            SwitchError::Indicator(_) => "indicator pin error",
            SwitchError::Button(_) => "button pin error",
        })
    }
}
