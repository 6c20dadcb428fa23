use crate::codec::CommandCodec;
use crate::command::CommandValue;
use crate::connection::{DispatchError, ReplyFrame};
use crate::error::CallError;
use crate::method::ValueShape;
use crate::output::CommandOutput;
use std::fmt;
use std::sync::Arc;

/// Decodes raw reply frames into the unwrapped value shape a method
/// declares. Codec-aware: the same declared shape yields different
/// decoded values under different codecs, because payload bytes always
/// pass through the resolved codec.
#[derive(Clone)]
pub struct OutputFactory {
    codec: Arc<dyn CommandCodec>,
    shape: ValueShape,
}

impl OutputFactory {
    pub(crate) fn new(codec: Arc<dyn CommandCodec>, shape: ValueShape) -> Self {
        Self { codec, shape }
    }

    pub fn shape(&self) -> ValueShape {
        self.shape
    }

    pub fn decode(&self, frame: ReplyFrame) -> Result<CommandOutput, CallError> {
        // Remote rejections surface as dispatch errors no matter the
        // declared shape.
        if let ReplyFrame::Error(message) = frame {
            return Err(CallError::Dispatch(DispatchError::Remote(message)));
        }

        match self.shape {
            ValueShape::Unit => match frame {
                ReplyFrame::Status(_) | ReplyFrame::Bulk(None) => Ok(CommandOutput::Unit),
                other => Err(self.unexpected(&other)),
            },
            ValueShape::Boolean => match frame {
                ReplyFrame::Integer(n) => Ok(CommandOutput::Boolean(n != 0)),
                ReplyFrame::Status(_) => Ok(CommandOutput::Boolean(true)),
                other => Err(self.unexpected(&other)),
            },
            ValueShape::Integer => match frame {
                ReplyFrame::Integer(n) => Ok(CommandOutput::Integer(n)),
                other => Err(self.unexpected(&other)),
            },
            ValueShape::Value | ValueShape::OptionalValue => {
                Ok(CommandOutput::Value(self.decode_element(frame)?))
            }
            ValueShape::ValueList => match frame {
                ReplyFrame::Array(frames) => {
                    Ok(CommandOutput::ValueList(self.decode_elements(frames)?))
                }
                other => Err(self.unexpected(&other)),
            },
            ValueShape::ValueSet => match frame {
                ReplyFrame::Array(frames) => {
                    Ok(CommandOutput::ValueSet(self.decode_elements(frames)?))
                }
                other => Err(self.unexpected(&other)),
            },
            ValueShape::KeyValueMap => match frame {
                ReplyFrame::Array(frames) => {
                    if frames.len() % 2 != 0 {
                        return Err(CallError::UnexpectedReply {
                            expected: self.shape,
                            detail: format!("odd element count {}", frames.len()),
                        });
                    }
                    let mut pairs = Vec::with_capacity(frames.len() / 2);
                    let mut frames = frames.into_iter();
                    while let (Some(key), Some(value)) = (frames.next(), frames.next()) {
                        let key = match key {
                            ReplyFrame::Bulk(Some(bytes)) => self
                                .codec
                                .decode_key(&bytes)
                                .map_err(|source| CallError::ReplyDecode { source })?,
                            other => return Err(self.unexpected(&other)),
                        };
                        pairs.push((key, self.decode_element(value)?));
                    }
                    Ok(CommandOutput::KeyValueMap(pairs))
                }
                other => Err(self.unexpected(&other)),
            },
        }
    }

    /// One scalar element through the value side of the codec.
    fn decode_element(&self, frame: ReplyFrame) -> Result<CommandValue, CallError> {
        match frame {
            ReplyFrame::Bulk(Some(bytes)) => self
                .codec
                .decode_value(&bytes)
                .map_err(|source| CallError::ReplyDecode { source }),
            ReplyFrame::Status(text) => self
                .codec
                .decode_value(text.as_bytes())
                .map_err(|source| CallError::ReplyDecode { source }),
            ReplyFrame::Bulk(None) => Ok(CommandValue::Absent),
            ReplyFrame::Integer(n) => Ok(CommandValue::Int(n)),
            other => Err(self.unexpected(&other)),
        }
    }

    fn decode_elements(&self, frames: Vec<ReplyFrame>) -> Result<Vec<CommandValue>, CallError> {
        frames
            .into_iter()
            .map(|frame| self.decode_element(frame))
            .collect()
    }

    fn unexpected(&self, frame: &ReplyFrame) -> CallError {
        CallError::UnexpectedReply {
            expected: self.shape,
            detail: format!("{:?}", frame),
        }
    }
}

impl fmt::Debug for OutputFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputFactory")
            .field("codec", &self.codec.name())
            .field("shape", &self.shape)
            .finish()
    }
}
