use dyncmd::command_method_id;
use dyncmd::method::{MethodSpec, ParameterSpec, ReturnShape, ValueShape};

/// Routing ids connections can match on. Each equals the id the binder
/// derives from the same method name.
pub const GET_METHOD_ID: u64 = command_method_id!("get");
pub const SET_METHOD_ID: u64 = command_method_id!("set");
pub const DEL_METHOD_ID: u64 = command_method_id!("del");
pub const EXISTS_METHOD_ID: u64 = command_method_id!("exists");
pub const MGET_METHOD_ID: u64 = command_method_id!("mget");
pub const HGETALL_METHOD_ID: u64 = command_method_id!("hgetall");
pub const KEYS_METHOD_ID: u64 = command_method_id!("keys");
pub const BRPOP_METHOD_ID: u64 = command_method_id!("brpop");

/// The declared cache interface: one spec per method, mixing the three
/// execution styles.
pub fn command_set() -> Vec<MethodSpec> {
    vec![
        // get(key) -> value, nil when missing
        MethodSpec::builder("get")
            .keyword("GET")
            .key_parameter("key")
            .returns(ReturnShape::Plain(ValueShape::OptionalValue))
            .build(),
        // set(key, value) -> OK
        MethodSpec::builder("set")
            .keyword("SET")
            .key_parameter("key")
            .value_parameter("value")
            .returns(ReturnShape::Plain(ValueShape::Unit))
            .build(),
        // del(keys...) -> removed count
        MethodSpec::builder("del")
            .keyword("DEL")
            .parameter(ParameterSpec::key("keys").variadic())
            .returns(ReturnShape::Plain(ValueShape::Integer))
            .build(),
        MethodSpec::builder("exists")
            .keyword("EXISTS")
            .key_parameter("key")
            .returns(ReturnShape::Plain(ValueShape::Boolean))
            .build(),
        // mget(keys...) -> values, resolved off-thread
        MethodSpec::builder("mget")
            .keyword("MGET")
            .parameter(ParameterSpec::key("keys").variadic())
            .returns(ReturnShape::Deferred(ValueShape::ValueList))
            .build(),
        MethodSpec::builder("hgetall")
            .keyword("HGETALL")
            .key_parameter("key")
            .returns(ReturnShape::Plain(ValueShape::KeyValueMap))
            .build(),
        // keys(pattern) -> lazy stream of matching keys
        MethodSpec::builder("keys")
            .keyword("KEYS")
            .value_parameter("pattern")
            .returns(ReturnShape::Streaming(ValueShape::Value))
            .build(),
        // brpop(key, timeout?) -> popped value; the timeout argument
        // bounds the blocking wait instead of the connection default
        MethodSpec::builder("brpop")
            .keyword("BRPOP")
            .key_parameter("key")
            .timeout_parameter("timeout")
            .returns(ReturnShape::Plain(ValueShape::OptionalValue))
            .build(),
    ]
}
