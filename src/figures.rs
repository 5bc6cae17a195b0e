/// The closed set of figures that can deliver the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Figure {
    Cow,
    Stegosaurus,
    Alligator,
    Whale,
    Cat,
}

impl Figure {
    pub const ALL: [Figure; 5] = [
        Figure::Cow,
        Figure::Stegosaurus,
        Figure::Alligator,
        Figure::Whale,
        Figure::Cat,
    ];

    /// Looks a figure up by name; `None` for anything outside the known set.
    pub fn parse(name: &str) -> Option<Figure> {
        match name {
            "cow" => Some(Figure::Cow),
            "stegosaurus" => Some(Figure::Stegosaurus),
            "alligator" => Some(Figure::Alligator),
            "whale" => Some(Figure::Whale),
            "cat" => Some(Figure::Cat),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Figure::Cow => "cow",
            Figure::Stegosaurus => "stegosaurus",
            Figure::Alligator => "alligator",
            Figure::Whale => "whale",
            Figure::Cat => "cat",
        }
    }

    pub fn art(self) -> &'static str {
        match self {
            Figure::Cow => COW,
            Figure::Stegosaurus => STEGOSAURUS,
            Figure::Alligator => ALLIGATOR,
            Figure::Whale => WHALE,
            Figure::Cat => CAT,
        }
    }
}

const COW: &str = r"         \  ^__^
          \ (oo)\_______
            (__)\       )\/\
                ||----w |
                ||     ||";

const STEGOSAURUS: &str = r#"         \                      .       .
          \                    / `.   .' "
           \           .---.  <    > <    >  .---.
            \          |    \  \ - ~ ~ - /  /    |
          _____           ..-~             ~-..-~
         |     |   \~~~\\.'                    `./~~~/
        ---------   \__/                         \__/
       .'  O    \     /               /       \  "
      (_____,    `._.'               |         }  \/~~~/
       `----.          /       }     |        /    \__/
             `-.      |       /      |       /      `. ,~~|
                 ~-.__|      /_ - ~ ^|      /- _      `..-'
                      |     /        |     /     ~-.     `-. _  _  _
                      |_____|        |_____|         ~ - . _ _ _ _ _>"#;

const ALLIGATOR: &str = r"      \
       \
        \
           .-._   _ _ _ _ _ _ _ _
.-''-.__.-'00  '-' ' ' ' ' ' ' ' '-.
'.___ '    .   .--_'-' '-' '-' _'-' '._
 V: V 'vv-'   '_   '.       .'  _..' '.'.
   '=.____.=_.--'   :_.__.__:_   '.   : :
           (((____.-'        '-.  /   : :
                             (((-'\ .' /
                           _____..'  .'
                          '-._____.-'";

const WHALE: &str = r"              \
               \
     .-'        \     
'--./ /     _.---.
'-,  (__..-'       \\
   \\          .     |
    ',.__.   ,__.--/
     '._/_.'___.-'";

const CAT: &str = r#"     \   
      \
     .ﾊ,,ﾊ
     ( ﾟωﾟ)
     |つ  つ
     |    |
     |    |
     |    |
     |    |
     |    |
     |    |
     |    |
     |    |
     |    |
     |    |
     |    |
     |    |
     |    |
     |    |
     |    |
     |    |
     |    |
     |    |
     U "  U"#;
