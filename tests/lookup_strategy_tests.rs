use dyncmd::client::CommandClient;
use dyncmd::codec::{CodecError, CommandCodec};
use dyncmd::command::{BoundCommand, CommandValue};
use dyncmd::connection::{CommandConnection, DeferredReply, DispatchError, ReplyFrame};
use dyncmd::error::{BindError, CallError};
use dyncmd::execute::ExecutableCommand;
use dyncmd::lookup::{
    BlockingLookupStrategy, DeferredLookupStrategy, ExecutableCommandLookupStrategy,
    StreamingLookupStrategy,
};
use dyncmd::method::{ExecutionStyle, MethodSpec, ParameterSpec, ReturnShape, Timeout, ValueShape};
use std::sync::Arc;

struct TextCodec;

impl CommandCodec for TextCodec {
    fn name(&self) -> &'static str {
        "text"
    }

    fn encode_key(&self, key: &CommandValue) -> Result<Vec<u8>, CodecError> {
        self.encode_value(key)
    }

    fn encode_value(&self, value: &CommandValue) -> Result<Vec<u8>, CodecError> {
        match value {
            CommandValue::Text(text) => Ok(text.clone().into_bytes()),
            other => Err(CodecError::Unencodable(format!("{other:?}"))),
        }
    }

    fn decode_key(&self, bytes: &[u8]) -> Result<CommandValue, CodecError> {
        self.decode_value(bytes)
    }

    fn decode_value(&self, bytes: &[u8]) -> Result<CommandValue, CodecError> {
        String::from_utf8(bytes.to_vec())
            .map(CommandValue::Text)
            .map_err(|_| CodecError::Undecodable("not UTF-8".to_string()))
    }
}

struct OkConnection;

#[async_trait::async_trait]
impl CommandConnection for OkConnection {
    async fn dispatch(&self, _command: BoundCommand) -> Result<DeferredReply, DispatchError> {
        let (mut tx, reply) = DeferredReply::bounded();
        tx.send_and_ignore(Ok(ReplyFrame::Status("OK".to_string())));
        tx.close();
        Ok(reply)
    }

    fn default_timeout(&self) -> Timeout {
        Timeout::from_millis(50)
    }
}

fn connection() -> Arc<dyn CommandConnection> {
    Arc::new(OkConnection)
}

fn codec() -> Arc<dyn CommandCodec> {
    Arc::new(TextCodec)
}

fn get_spec(returns: ReturnShape) -> MethodSpec {
    MethodSpec::builder("get")
        .keyword("GET")
        .key_parameter("key")
        .returns(returns)
        .build()
}

#[test]
fn each_strategy_serves_exactly_its_style() {
    let blocking = BlockingLookupStrategy::new(connection(), Some(codec()));
    let deferred = DeferredLookupStrategy::new(connection(), Some(codec()));
    let streaming = StreamingLookupStrategy::new(connection(), Some(codec()));

    assert_eq!(blocking.style(), ExecutionStyle::Blocking);
    assert_eq!(deferred.style(), ExecutionStyle::Deferred);
    assert_eq!(streaming.style(), ExecutionStyle::Streaming);

    let resolved = blocking
        .resolve(get_spec(ReturnShape::Plain(ValueShape::OptionalValue)))
        .unwrap();
    assert!(matches!(resolved, ExecutableCommand::Blocking(_)));

    let resolved = deferred
        .resolve(get_spec(ReturnShape::Deferred(ValueShape::OptionalValue)))
        .unwrap();
    assert!(matches!(resolved, ExecutableCommand::Deferred(_)));

    let resolved = streaming
        .resolve(get_spec(ReturnShape::Streaming(ValueShape::Value)))
        .unwrap();
    assert!(matches!(resolved, ExecutableCommand::Streaming(_)));
}

#[test]
fn style_mismatch_fails_fast_naming_both_styles() {
    let blocking = BlockingLookupStrategy::new(connection(), Some(codec()));

    let err = blocking
        .resolve(get_spec(ReturnShape::Deferred(ValueShape::Value)))
        .unwrap_err();
    match err {
        BindError::StyleMismatch {
            method,
            declared,
            expected,
        } => {
            assert_eq!(method, "get");
            assert_eq!(declared, ExecutionStyle::Deferred);
            assert_eq!(expected, ExecutionStyle::Blocking);
        }
        other => panic!("unexpected bind error: {other:?}"),
    }
}

#[test]
fn missing_codec_is_unresolvable() {
    let blocking = BlockingLookupStrategy::new(connection(), None);

    let err = blocking
        .resolve(get_spec(ReturnShape::Plain(ValueShape::Value)))
        .unwrap_err();
    assert!(matches!(err, BindError::UnresolvableCodec { .. }));
}

#[test]
fn method_codec_annotation_wins_over_no_default() {
    let blocking = BlockingLookupStrategy::new(connection(), None);
    let spec = MethodSpec::builder("get")
        .keyword("GET")
        .key_parameter("key")
        .returns(ReturnShape::Plain(ValueShape::Value))
        .codec(codec())
        .build();

    assert!(blocking.resolve(spec).is_ok());
}

#[test]
fn malformed_declarations_abort_resolution() {
    let blocking = BlockingLookupStrategy::new(connection(), Some(codec()));
    // Variadic parameter followed by another wire parameter.
    let spec = MethodSpec::builder("bad")
        .keyword("BAD")
        .parameter(ParameterSpec::key("keys").variadic())
        .value_parameter("tail")
        .returns(ReturnShape::Plain(ValueShape::Unit))
        .build();

    let err = blocking.resolve(spec).unwrap_err();
    assert!(matches!(err, BindError::MalformedTemplate { .. }));
}

#[test]
fn builder_rejects_duplicate_method_names() {
    let err = CommandClient::builder(connection())
        .default_codec(codec())
        .register(get_spec(ReturnShape::Plain(ValueShape::Value)))
        .register(get_spec(ReturnShape::Deferred(ValueShape::Value)))
        .build()
        .unwrap_err();

    match err {
        BindError::DuplicateMethod { method } => assert_eq!(method, "get"),
        other => panic!("unexpected bind error: {other:?}"),
    }
}

#[test]
fn one_bad_registration_aborts_the_whole_build() {
    let err = CommandClient::builder(connection())
        .default_codec(codec())
        .register(get_spec(ReturnShape::Plain(ValueShape::Value)))
        .register(
            MethodSpec::builder("wait")
                .keyword("WAIT")
                .timeout_parameter("a")
                .timeout_parameter("b")
                .build(),
        )
        .build()
        .unwrap_err();

    assert!(matches!(err, BindError::AmbiguousTimeoutParameter { .. }));
}

#[test]
fn built_client_resolves_each_method_once() {
    let client = CommandClient::builder(connection())
        .default_codec(codec())
        .register(get_spec(ReturnShape::Plain(ValueShape::Unit)))
        .register(
            MethodSpec::builder("subscribe")
                .keyword("SUBSCRIBE")
                .value_parameter("channel")
                .returns(ReturnShape::Streaming(ValueShape::Value))
                .build(),
        )
        .build()
        .unwrap();

    assert_eq!(client.len(), 2);
    assert_eq!(
        client.command("get").unwrap().style(),
        ExecutionStyle::Blocking
    );
    assert_eq!(
        client.command("subscribe").unwrap().style(),
        ExecutionStyle::Streaming
    );
    assert!(client.command("unregistered").is_none());
}

#[test]
fn client_and_executables_render_debug_summaries() {
    let client = CommandClient::builder(connection())
        .default_codec(codec())
        .register(get_spec(ReturnShape::Plain(ValueShape::Unit)))
        .build()
        .unwrap();

    assert!(format!("{client:?}").contains("CommandClient"));

    let rendered = format!("{:?}", client.command("get").unwrap());
    assert!(rendered.contains("get"));
    assert!(rendered.contains("Blocking"));
}

#[test]
fn unknown_methods_fail_at_call_time() {
    let client = CommandClient::builder(connection())
        .default_codec(codec())
        .build()
        .unwrap();

    let err = client.invoke_blocking("get", &[]).unwrap_err();
    assert!(matches!(err, CallError::UnknownMethod { .. }));
}

#[test]
fn invoking_through_the_wrong_entry_point_names_the_declared_style() {
    let client = CommandClient::builder(connection())
        .default_codec(codec())
        .register(get_spec(ReturnShape::Deferred(ValueShape::Value)))
        .build()
        .unwrap();

    let err = client
        .invoke_blocking("get", &[CommandValue::Text("k".to_string())])
        .unwrap_err();
    match err {
        CallError::WrongExecutionStyle { method, declared } => {
            assert_eq!(method, "get");
            assert_eq!(declared, ExecutionStyle::Deferred);
        }
        other => panic!("unexpected call error: {other:?}"),
    }
}
