// Listener setup
// Binds the serving socket with address/port reuse enabled

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::TcpListener;

const BACKLOG: i32 = 128;

/// Bind `addr` with `SO_REUSEADDR` and `SO_REUSEPORT` set.
///
/// Reuse lets a replacement process bind the same address while the old
/// one drains, so restarts and redeploys never fight over the socket.
pub fn create_reusable_listener(addr: std::net::SocketAddr) -> std::io::Result<TcpListener> {
    let socket = Socket::new(Domain::for_address(addr), Type::STREAM, Some(Protocol::TCP))?;

    socket.set_reuse_port(true)?;
    socket.set_reuse_address(true)?;
    // Tokio requires the socket in non-blocking mode
    socket.set_nonblocking(true)?;

    socket.bind(&addr.into())?;
    socket.listen(BACKLOG)?;

    TcpListener::from_std(socket.into())
}
