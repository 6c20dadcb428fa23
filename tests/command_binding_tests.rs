//! Argument binding as observed from the connection side: the tokens a
//! dispatched command carries, and the errors raised before dispatch.

use dyncmd::client::CommandClient;
use dyncmd::codec::{CodecError, CommandCodec};
use dyncmd::command::{BoundCommand, CommandValue};
use dyncmd::connection::{CommandConnection, DeferredReply, DispatchError, ReplyFrame};
use dyncmd::error::CallError;
use dyncmd::method::{MethodSpec, ParameterSpec, ReturnShape, Timeout, ValueShape};
use std::sync::{Arc, Mutex};

/// Text passthrough codec that tags keys and values differently, so
/// tests can see which codec side an argument went through.
struct TaggingCodec;

impl CommandCodec for TaggingCodec {
    fn name(&self) -> &'static str {
        "tagging"
    }

    fn encode_key(&self, key: &CommandValue) -> Result<Vec<u8>, CodecError> {
        match key {
            CommandValue::Text(text) => Ok(format!("k:{text}").into_bytes()),
            other => Err(CodecError::Unencodable(format!("{other:?}"))),
        }
    }

    fn encode_value(&self, value: &CommandValue) -> Result<Vec<u8>, CodecError> {
        match value {
            CommandValue::Text(text) => Ok(format!("v:{text}").into_bytes()),
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

/// Records every dispatched command and answers `OK`.
#[derive(Default)]
struct RecordingConnection {
    dispatched: Mutex<Vec<(u32, u64, Vec<Vec<u8>>)>>,
}

impl RecordingConnection {
    fn tokens(&self) -> Vec<Vec<Vec<u8>>> {
        self.dispatched
            .lock()
            .unwrap()
            .iter()
            .map(|(_, _, tokens)| tokens.clone())
            .collect()
    }
}

#[async_trait::async_trait]
impl CommandConnection for RecordingConnection {
    async fn dispatch(&self, command: BoundCommand) -> Result<DeferredReply, DispatchError> {
        self.dispatched.lock().unwrap().push((
            command.invocation_id,
            command.method_id,
            command.tokens,
        ));
        let (mut tx, reply) = DeferredReply::bounded();
        tx.send_and_ignore(Ok(ReplyFrame::Status("OK".to_string())));
        tx.close();
        Ok(reply)
    }

    fn default_timeout(&self) -> Timeout {
        Timeout::from_millis(100)
    }
}

fn client_over(connection: Arc<RecordingConnection>, specs: Vec<MethodSpec>) -> CommandClient {
    CommandClient::builder(connection)
        .default_codec(Arc::new(TaggingCodec))
        .register_all(specs)
        .build()
        .unwrap()
}

fn text(s: &str) -> CommandValue {
    CommandValue::Text(s.to_string())
}

#[test]
fn tokens_follow_template_order_with_codec_sides() {
    let connection = Arc::new(RecordingConnection::default());
    let client = client_over(
        Arc::clone(&connection),
        vec![
            MethodSpec::builder("set")
                .keyword("SET")
                .key_parameter("key")
                .value_parameter("value")
                .returns(ReturnShape::Plain(ValueShape::Unit))
                .build(),
        ],
    );

    client.invoke_blocking("set", &[text("color"), text("teal")]).unwrap();

    assert_eq!(
        connection.tokens(),
        vec![vec![
            b"SET".to_vec(),
            b"k:color".to_vec(),
            b"v:teal".to_vec(),
        ]]
    );
}

#[test]
fn same_template_different_arguments_differ_only_at_placeholders() {
    let connection = Arc::new(RecordingConnection::default());
    let client = client_over(
        Arc::clone(&connection),
        vec![
            MethodSpec::builder("get")
                .keyword("GET")
                .key_parameter("key")
                .returns(ReturnShape::Plain(ValueShape::Unit))
                .build(),
        ],
    );

    client.invoke_blocking("get", &[text("a")]).unwrap();
    client.invoke_blocking("get", &[text("b")]).unwrap();

    let tokens = connection.tokens();
    assert_eq!(tokens[0][0], tokens[1][0]);
    assert_ne!(tokens[0][1], tokens[1][1]);
}

#[test]
fn variadic_sequences_expand_in_order() {
    let connection = Arc::new(RecordingConnection::default());
    let client = client_over(
        Arc::clone(&connection),
        vec![
            MethodSpec::builder("del")
                .keyword("DEL")
                .parameter(ParameterSpec::key("keys").variadic())
                .returns(ReturnShape::Plain(ValueShape::Unit))
                .build(),
        ],
    );

    client
        .invoke_blocking(
            "del",
            &[CommandValue::Seq(vec![text("a"), text("b"), text("c")])],
        )
        .unwrap();
    // A lone value is a one-element expansion.
    client.invoke_blocking("del", &[text("solo")]).unwrap();

    let tokens = connection.tokens();
    assert_eq!(
        tokens[0],
        vec![
            b"DEL".to_vec(),
            b"k:a".to_vec(),
            b"k:b".to_vec(),
            b"k:c".to_vec(),
        ]
    );
    assert_eq!(tokens[1], vec![b"DEL".to_vec(), b"k:solo".to_vec()]);
}

#[test]
fn invocation_ids_are_unique_per_call() {
    let connection = Arc::new(RecordingConnection::default());
    let client = client_over(
        Arc::clone(&connection),
        vec![
            MethodSpec::builder("ping")
                .keyword("PING")
                .returns(ReturnShape::Plain(ValueShape::Unit))
                .build(),
        ],
    );

    client.invoke_blocking("ping", &[]).unwrap();
    client.invoke_blocking("ping", &[]).unwrap();

    let dispatched = connection.dispatched.lock().unwrap();
    assert_ne!(dispatched[0].0, dispatched[1].0);
    // The routing id is the same stable hash on both calls.
    assert_eq!(dispatched[0].1, dispatched[1].1);
}

#[test]
fn argument_count_mismatch_is_raised_before_dispatch() {
    let connection = Arc::new(RecordingConnection::default());
    let client = client_over(
        Arc::clone(&connection),
        vec![
            MethodSpec::builder("get")
                .keyword("GET")
                .key_parameter("key")
                .returns(ReturnShape::Plain(ValueShape::Unit))
                .build(),
        ],
    );

    let err = client.invoke_blocking("get", &[]).unwrap_err();
    match err {
        CallError::ArgumentCountMismatch {
            expected, actual, ..
        } => {
            assert_eq!(expected, 1);
            assert_eq!(actual, 0);
        }
        other => panic!("unexpected call error: {other:?}"),
    }
    assert!(connection.tokens().is_empty());
}

#[test]
fn plain_text_get_binds_and_decodes_verbatim() {
    struct PlainCodec;

    impl CommandCodec for PlainCodec {
        fn name(&self) -> &'static str {
            "plain"
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

    struct OneValueConnection {
        dispatched: Mutex<Vec<Vec<Vec<u8>>>>,
    }

    #[async_trait::async_trait]
    impl CommandConnection for OneValueConnection {
        async fn dispatch(&self, command: BoundCommand) -> Result<DeferredReply, DispatchError> {
            self.dispatched.lock().unwrap().push(command.tokens);
            let (mut tx, reply) = DeferredReply::bounded();
            tx.send_and_ignore(Ok(ReplyFrame::Bulk(Some(b"1".to_vec()))));
            tx.close();
            Ok(reply)
        }

        fn default_timeout(&self) -> Timeout {
            Timeout::from_millis(100)
        }
    }

    let connection = Arc::new(OneValueConnection {
        dispatched: Mutex::new(Vec::new()),
    });
    let client = CommandClient::builder(Arc::clone(&connection) as Arc<dyn CommandConnection>)
        .default_codec(Arc::new(PlainCodec))
        .register(
            MethodSpec::builder("get")
                .keyword("GET")
                .key_parameter("key")
                .returns(ReturnShape::Plain(ValueShape::Value))
                .build(),
        )
        .build()
        .unwrap();

    let output = client
        .invoke_blocking("get", &[text("a")])
        .unwrap();
    assert_eq!(output, dyncmd::output::CommandOutput::Value(text("1")));
    assert_eq!(
        connection.dispatched.lock().unwrap()[0],
        vec![b"GET".to_vec(), b"a".to_vec()]
    );
}

#[test]
fn unencodable_argument_names_its_position() {
    let connection = Arc::new(RecordingConnection::default());
    let client = client_over(
        Arc::clone(&connection),
        vec![
            MethodSpec::builder("set")
                .keyword("SET")
                .key_parameter("key")
                .value_parameter("value")
                .returns(ReturnShape::Plain(ValueShape::Unit))
                .build(),
        ],
    );

    let err = client
        .invoke_blocking("set", &[text("key"), CommandValue::Bytes(vec![1, 2])])
        .unwrap_err();
    match err {
        CallError::ArgumentEncoding { index, .. } => assert_eq!(index, 1),
        other => panic!("unexpected call error: {other:?}"),
    }
    assert!(connection.tokens().is_empty());
}
