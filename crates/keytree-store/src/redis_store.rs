use crate::{Error, Result, StoreConfig};
use keytree_types::{FetchedValue, KeyStore, KeyType, Ttl};
use redis::{Cmd, FromRedisValue};

/// [`KeyStore`] backed by one synchronous Redis connection.
///
/// The connection is opened by [`RedisStore::connect`] and closed when the
/// store is dropped. Every lookup is a single blocking round trip.
pub struct RedisStore {
    conn: redis::Connection,
    address: String,
}

impl RedisStore {
    pub fn connect(config: &StoreConfig) -> Result<Self> {
        let info = config.connection_info()?;
        let address = info.addr.to_string();

        let client = redis::Client::open(info)?;
        let conn = match config.connect_timeout {
            Some(timeout) => client.get_connection_with_timeout(timeout),
            None => client.get_connection(),
        }
        .map_err(|source| Error::Connection {
            address: address.clone(),
            source,
        })?;

        tracing::debug!(%address, "connected");
        Ok(Self { conn, address })
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    fn query<T: FromRedisValue>(&mut self, cmd: &Cmd) -> Result<T> {
        Ok(cmd.query(&mut self.conn)?)
    }
}

impl KeyStore for RedisStore {
    fn resolve(&mut self, pattern: &str) -> keytree_types::Result<Vec<String>> {
        let keys: Vec<Vec<u8>> = self.query(redis::cmd("KEYS").arg(pattern))?;
        Ok(keys.into_iter().map(text).collect())
    }

    fn key_type(&mut self, key: &str) -> keytree_types::Result<KeyType> {
        let name: String = self.query(redis::cmd("TYPE").arg(key))?;
        Ok(KeyType::from_name(&name))
    }

    fn ttl(&mut self, key: &str) -> keytree_types::Result<Ttl> {
        let reply: i64 = self.query(redis::cmd("TTL").arg(key))?;
        Ok(Ttl::from_reply(reply))
    }

    fn value(&mut self, key: &str, kind: &KeyType) -> keytree_types::Result<FetchedValue> {
        let value = match kind {
            KeyType::String => {
                let bytes: Option<Vec<u8>> = self.query(redis::cmd("GET").arg(key))?;
                bytes.map(FetchedValue::Scalar).unwrap_or_default()
            }
            KeyType::List => {
                let items: Vec<Vec<u8>> =
                    self.query(redis::cmd("LRANGE").arg(key).arg(0).arg(-1))?;
                FetchedValue::List(items.into_iter().map(text).collect())
            }
            KeyType::Set => {
                let members: Vec<Vec<u8>> = self.query(redis::cmd("SMEMBERS").arg(key))?;
                FetchedValue::Set(members.into_iter().map(text).collect())
            }
            KeyType::Hash => {
                let fields: Vec<(Vec<u8>, Vec<u8>)> =
                    self.query(redis::cmd("HGETALL").arg(key))?;
                let mut pairs = text_pairs(fields);
                pairs.sort();
                FetchedValue::Map(pairs)
            }
            KeyType::ZSet => {
                let members: Vec<(Vec<u8>, Vec<u8>)> = self.query(
                    redis::cmd("ZRANGE")
                        .arg(key)
                        .arg(0)
                        .arg(-1)
                        .arg("WITHSCORES"),
                )?;
                FetchedValue::Map(text_pairs(members))
            }
            KeyType::Other(_) => FetchedValue::Empty,
        };
        Ok(value)
    }
}

fn text(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes)
        .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}

fn text_pairs(pairs: Vec<(Vec<u8>, Vec<u8>)>) -> Vec<(String, String)> {
    pairs
        .into_iter()
        .map(|(field, value)| (text(field), text(value)))
        .collect()
}
