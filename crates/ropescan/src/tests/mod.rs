mod properties;
mod textbuf;
